pub mod controller;
pub mod controls;
pub mod fullscreen;
pub mod headless;
pub mod input;
pub mod playlist;
pub mod traits;
pub mod types;

pub use controller::{PlayerCommand, PlayerController, PlayerHandle};
pub use controls::ControlsVisibility;
pub use fullscreen::FullscreenCoordinator;
pub use headless::HeadlessElement;
pub use input::{InputRouter, PointerGesture, TransportButton};
pub use playlist::Playlist;
pub use traits::{FullscreenBackend, MediaElement};
pub use types::{PlaybackRate, PlaybackSnapshot, RATE_STEPS};
