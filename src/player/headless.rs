use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use super::traits::MediaElement;

/// Media element that renders nothing and logs every forwarded command.
/// Stands in for a real rendering backend in headless runs.
pub struct HeadlessElement {
    state: Mutex<ElementState>,
}

#[derive(Debug, Default)]
struct ElementState {
    source: Option<String>,
    muted: bool,
}

impl HeadlessElement {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ElementState::default()),
        }
    }

    pub fn current_url(&self) -> Option<String> {
        self.state.lock().unwrap().source.clone()
    }
}

impl Default for HeadlessElement {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaElement for HeadlessElement {
    async fn load(&self, url: &str) -> Result<()> {
        debug!("element: load {url}");
        self.state.lock().unwrap().source = Some(url.to_string());
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        debug!("element: play");
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        debug!("element: pause");
        Ok(())
    }

    async fn seek_to(&self, position: Duration) -> Result<()> {
        debug!("element: seek to {position:?}");
        Ok(())
    }

    async fn seek_by(&self, delta_secs: f64) -> Result<()> {
        debug!("element: seek by {delta_secs}s");
        Ok(())
    }

    async fn set_volume(&self, volume: f64) -> Result<()> {
        debug!("element: volume {volume}");
        Ok(())
    }

    async fn set_rate(&self, rate: f64) -> Result<()> {
        debug!("element: rate {rate}");
        Ok(())
    }

    async fn toggle_mute(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.muted = !state.muted;
        debug!("element: muted {}", state.muted);
        Ok(())
    }
}
