use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Command interface to the external media-rendering element.
///
/// Implementations only translate between this vocabulary and the native
/// element API; no playback policy lives here. Position and duration
/// changes caused by these commands are observed later through the
/// controller's notification path, never synchronously.
#[async_trait]
pub trait MediaElement: Send + Sync {
    async fn load(&self, url: &str) -> Result<()>;
    async fn play(&self) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn seek_to(&self, position: Duration) -> Result<()>;
    /// Relative seek in seconds; the element clamps to [0, duration].
    async fn seek_by(&self, delta_secs: f64) -> Result<()>;
    async fn set_volume(&self, volume: f64) -> Result<()>;
    async fn set_rate(&self, rate: f64) -> Result<()>;
    async fn toggle_mute(&self) -> Result<()>;
}

/// Platform fullscreen capability, detected once at startup. Absence of an
/// implementation degrades fullscreen toggling to a no-op.
pub trait FullscreenBackend: Send + Sync {
    fn request(&self) -> Result<()>;
    fn exit(&self) -> Result<()>;
}
