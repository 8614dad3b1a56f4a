use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use matinee::player::traits::{FullscreenBackend, MediaElement};

/// One forwarded media-element command, as recorded by `MockElement`.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementCall {
    Load(String),
    Play,
    Pause,
    SeekTo(Duration),
    SeekBy(f64),
    SetVolume(f64),
    SetRate(f64),
    ToggleMute,
}

/// Media element that records every command it receives.
#[derive(Default)]
pub struct MockElement {
    calls: Mutex<Vec<ElementCall>>,
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ElementCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &ElementCall) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: ElementCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MediaElement for MockElement {
    async fn load(&self, url: &str) -> Result<()> {
        self.record(ElementCall::Load(url.to_string()));
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        self.record(ElementCall::Play);
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        self.record(ElementCall::Pause);
        Ok(())
    }

    async fn seek_to(&self, position: Duration) -> Result<()> {
        self.record(ElementCall::SeekTo(position));
        Ok(())
    }

    async fn seek_by(&self, delta_secs: f64) -> Result<()> {
        self.record(ElementCall::SeekBy(delta_secs));
        Ok(())
    }

    async fn set_volume(&self, volume: f64) -> Result<()> {
        self.record(ElementCall::SetVolume(volume));
        Ok(())
    }

    async fn set_rate(&self, rate: f64) -> Result<()> {
        self.record(ElementCall::SetRate(rate));
        Ok(())
    }

    async fn toggle_mute(&self) -> Result<()> {
        self.record(ElementCall::ToggleMute);
        Ok(())
    }
}

/// Fullscreen capability that counts requests and exits without granting
/// anything; the platform notification is driven by the test.
#[derive(Clone, Default)]
pub struct MockFullscreen {
    pub requests: Arc<Mutex<u32>>,
    pub exits: Arc<Mutex<u32>>,
}

impl MockFullscreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> u32 {
        *self.requests.lock().unwrap()
    }

    pub fn exit_count(&self) -> u32 {
        *self.exits.lock().unwrap()
    }
}

impl FullscreenBackend for MockFullscreen {
    fn request(&self) -> Result<()> {
        *self.requests.lock().unwrap() += 1;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        *self.exits.lock().unwrap() += 1;
        Ok(())
    }
}
