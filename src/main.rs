use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use matinee::config::Config;
use matinee::events::EventBus;
use matinee::player::{HeadlessElement, InputRouter, PlayerController};

/// Drives the playback controller through a short scripted session against
/// the headless element, standing in for a rendering frontend.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("matinee=debug")
        .init();

    info!("Starting matinee playback controller");

    let config = Config::load()?;
    let event_bus = Arc::new(EventBus::new(config.events.bus_capacity));
    let element = Arc::new(HeadlessElement::new());
    let router = InputRouter::new(&config);

    let (handle, controller) = PlayerController::new(&config, element, None, event_bus.clone())?;
    tokio::spawn(controller.run());

    // Log everything the controller publishes
    let mut subscriber = event_bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = subscriber.recv().await {
            info!("event: {}", event.event_type.as_str());
        }
    });

    let (epoch, source) = handle.current_source().await?;
    info!("Bound to {source}");

    // The element signals readiness, then the user plays, seeks around,
    // speeds up and skips to the next source.
    handle.notify_loaded(epoch, Duration::from_secs(888))?;
    for key in [" ", "ArrowRight", "ArrowUp"] {
        if let Some(command) = router.route_key(key) {
            handle.dispatch(command)?;
        }
    }
    handle.notify_time_update(epoch, Duration::from_secs(10), Duration::from_secs(888))?;
    handle.set_rate(1.5).await?;
    if let Some(command) = router.route_key("n") {
        handle.dispatch(command)?;
    }

    let snapshot = handle.snapshot().await?;
    let (_, source) = handle.current_source().await?;
    info!(
        "Session finished on {source}: playing={} loading={} rate={}",
        snapshot.is_playing, snapshot.is_loading, snapshot.rate
    );

    Ok(())
}
