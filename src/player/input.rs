use crate::config::Config;

use super::controller::PlayerCommand;

/// Transport buttons on the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportButton {
    PlayPause,
    Previous,
    Next,
    SeekBack,
    SeekForward,
    Fullscreen,
}

/// Pointer gestures on specific control regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    /// Click on the progress bar at `offset_x` within a bar of `width`
    ProgressClick { offset_x: f64, width: f64 },
    /// Drag or change on the volume slider
    VolumeSlider(f64),
    /// Selection on the rate selector
    RateSelect(f64),
    /// Click on a transport button
    Transport(TransportButton),
}

/// Maps keyboard and pointer input to controller commands, one gesture to
/// exactly one command. Unrecognized input maps to nothing.
pub struct InputRouter {
    seek_step_secs: f64,
    volume_step: f64,
}

impl InputRouter {
    pub fn new(config: &Config) -> Self {
        Self {
            seek_step_secs: config.playback.seek_step_secs,
            volume_step: config.playback.volume_step,
        }
    }

    /// Route a key press by its name (DOM-style key values).
    pub fn route_key(&self, key: &str) -> Option<PlayerCommand> {
        match key {
            " " => Some(PlayerCommand::TogglePlay),
            "ArrowUp" => Some(PlayerCommand::VolumeDelta(self.volume_step)),
            "ArrowDown" => Some(PlayerCommand::VolumeDelta(-self.volume_step)),
            "ArrowRight" => Some(PlayerCommand::SeekBy(self.seek_step_secs)),
            "ArrowLeft" => Some(PlayerCommand::SeekBy(-self.seek_step_secs)),
            "m" | "M" => Some(PlayerCommand::ToggleMute),
            "f" | "F" | "Escape" => Some(PlayerCommand::FullscreenToggle),
            "w" | "W" => Some(PlayerCommand::Minimize),
            "n" | "N" => Some(PlayerCommand::Next),
            "p" | "P" => Some(PlayerCommand::Previous),
            _ => None,
        }
    }

    pub fn route_pointer(&self, gesture: PointerGesture) -> Option<PlayerCommand> {
        match gesture {
            PointerGesture::ProgressClick { offset_x, width } => {
                let fraction = if width > 0.0 { offset_x / width } else { 0.0 };
                Some(PlayerCommand::SeekToFraction(fraction))
            }
            PointerGesture::VolumeSlider(volume) => Some(PlayerCommand::VolumeSet(volume)),
            PointerGesture::RateSelect(rate) => Some(PlayerCommand::RateSet {
                rate,
                respond_to: None,
            }),
            PointerGesture::Transport(button) => Some(match button {
                TransportButton::PlayPause => PlayerCommand::TogglePlay,
                TransportButton::Previous => PlayerCommand::Previous,
                TransportButton::Next => PlayerCommand::Next,
                TransportButton::SeekBack => PlayerCommand::SeekBy(-self.seek_step_secs),
                TransportButton::SeekForward => PlayerCommand::SeekBy(self.seek_step_secs),
                TransportButton::Fullscreen => PlayerCommand::FullscreenToggle,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> InputRouter {
        InputRouter::new(&Config::default())
    }

    #[test]
    fn test_keyboard_map() {
        let router = router();
        assert!(matches!(
            router.route_key(" "),
            Some(PlayerCommand::TogglePlay)
        ));
        assert!(matches!(
            router.route_key("ArrowUp"),
            Some(PlayerCommand::VolumeDelta(d)) if d == 0.1
        ));
        assert!(matches!(
            router.route_key("ArrowDown"),
            Some(PlayerCommand::VolumeDelta(d)) if d == -0.1
        ));
        assert!(matches!(
            router.route_key("ArrowLeft"),
            Some(PlayerCommand::SeekBy(d)) if d == -10.0
        ));
        assert!(matches!(
            router.route_key("ArrowRight"),
            Some(PlayerCommand::SeekBy(d)) if d == 10.0
        ));
        assert!(matches!(
            router.route_key("m"),
            Some(PlayerCommand::ToggleMute)
        ));
        assert!(matches!(
            router.route_key("M"),
            Some(PlayerCommand::ToggleMute)
        ));
        assert!(matches!(
            router.route_key("f"),
            Some(PlayerCommand::FullscreenToggle)
        ));
        assert!(matches!(
            router.route_key("Escape"),
            Some(PlayerCommand::FullscreenToggle)
        ));
        assert!(matches!(
            router.route_key("w"),
            Some(PlayerCommand::Minimize)
        ));
        assert!(matches!(router.route_key("n"), Some(PlayerCommand::Next)));
        assert!(matches!(
            router.route_key("p"),
            Some(PlayerCommand::Previous)
        ));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let router = router();
        assert!(router.route_key("x").is_none());
        assert!(router.route_key("Enter").is_none());
        assert!(router.route_key("").is_none());
    }

    #[test]
    fn test_progress_click_fraction() {
        let router = router();
        let command = router.route_pointer(PointerGesture::ProgressClick {
            offset_x: 150.0,
            width: 600.0,
        });
        assert!(matches!(
            command,
            Some(PlayerCommand::SeekToFraction(f)) if f == 0.25
        ));
    }

    #[test]
    fn test_progress_click_with_zero_width_bar() {
        let router = router();
        let command = router.route_pointer(PointerGesture::ProgressClick {
            offset_x: 10.0,
            width: 0.0,
        });
        assert!(matches!(
            command,
            Some(PlayerCommand::SeekToFraction(f)) if f == 0.0
        ));
    }

    #[test]
    fn test_transport_buttons() {
        let router = router();
        assert!(matches!(
            router.route_pointer(PointerGesture::Transport(TransportButton::SeekBack)),
            Some(PlayerCommand::SeekBy(d)) if d == -10.0
        ));
        assert!(matches!(
            router.route_pointer(PointerGesture::RateSelect(1.5)),
            Some(PlayerCommand::RateSet { rate, .. }) if rate == 1.5
        ));
    }
}
