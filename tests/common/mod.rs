pub mod mocks;

use std::sync::Arc;

use matinee::config::Config;
use matinee::events::EventBus;
use matinee::player::{PlayerController, PlayerHandle};
use self::mocks::MockElement;

/// Config pointing at an explicit source list, with a quiet default volume.
pub fn test_config(sources: &[&str]) -> Config {
    let mut config = Config::default();
    config.playlist.sources = sources.iter().map(|s| s.to_string()).collect();
    config
}

/// Spawn a controller over a recording mock element and return the handle,
/// the element and the event bus.
pub fn spawn_player(config: &Config) -> (PlayerHandle, Arc<MockElement>, Arc<EventBus>) {
    let element = Arc::new(MockElement::new());
    let event_bus = Arc::new(EventBus::new(config.events.bus_capacity));
    let (handle, controller) =
        PlayerController::new(config, element.clone(), None, event_bus.clone())
            .expect("Failed to create player controller");
    tokio::spawn(controller.run());
    (handle, element, event_bus)
}
