use tracing::{debug, warn};

use super::traits::FullscreenBackend;

/// Tracks the fullscreen flag for one player.
///
/// `toggle` only issues the platform request or exit call; the flag itself
/// is written exclusively by `on_platform_change`, driven by the platform's
/// fullscreen-change notification. A failed request or a user-driven exit
/// (OS-level Escape) therefore cannot leave the flag out of sync.
pub struct FullscreenCoordinator {
    backend: Option<Box<dyn FullscreenBackend>>,
    active: bool,
}

impl FullscreenCoordinator {
    pub fn new(backend: Option<Box<dyn FullscreenBackend>>) -> Self {
        if backend.is_none() {
            debug!("No fullscreen capability detected, toggles will be no-ops");
        }
        Self {
            backend,
            active: false,
        }
    }

    pub fn toggle(&mut self) {
        let Some(ref backend) = self.backend else {
            return;
        };
        let result = if self.active {
            debug!("Requesting fullscreen exit");
            backend.exit()
        } else {
            debug!("Requesting fullscreen");
            backend.request()
        };
        if let Err(e) = result {
            warn!("Fullscreen request failed: {e}");
        }
    }

    /// Apply the platform's fullscreen-change notification.
    pub fn on_platform_change(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
