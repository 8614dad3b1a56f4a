//! Common value types shared by the controller and its consumers

use std::fmt;
use std::time::Duration;

use crate::utils::errors::PlayerError;

/// The discrete playback rates offered by the rate selector, 0.25x through
/// 3.75x in steps of 0.25.
pub const RATE_STEPS: [f64; 15] = [
    0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0, 3.25, 3.5, 3.75,
];

/// A validated playback rate. Construction fails for values outside the
/// step table so the rate selector and the stored state can never diverge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    pub fn new(rate: f64) -> Result<Self, PlayerError> {
        if RATE_STEPS.contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(PlayerError::InvalidRate(rate))
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    pub fn steps() -> &'static [f64] {
        &RATE_STEPS
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Playback state at one instant. Replaced as a whole on every transition;
/// consumers never observe a partially updated value.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    /// True until the first loaded notification for the current source.
    pub is_loading: bool,
    pub position: Duration,
    /// Duration::ZERO until the element reports it.
    pub duration: Duration,
    pub volume: f64,
    pub muted: bool,
    pub rate: PlaybackRate,
}

impl PlaybackSnapshot {
    pub fn new(volume: f64) -> Self {
        Self {
            is_playing: false,
            is_loading: true,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume: volume.clamp(0.0, 1.0),
            muted: false,
            rate: PlaybackRate::default(),
        }
    }

    /// Reset for a source swap. Position and duration are meaningless for
    /// the new source; volume, mute and rate carry over.
    pub fn reset_for_new_source(&mut self) {
        self.is_loading = true;
        self.position = Duration::ZERO;
        self.duration = Duration::ZERO;
    }

    /// Progress through the current source as a percentage, 0 while the
    /// duration is unknown.
    pub fn progress_percent(&self) -> f64 {
        if self.duration.is_zero() {
            0.0
        } else {
            (self.position.as_secs_f64() / self.duration.as_secs_f64()) * 100.0
        }
    }

    pub fn time_remaining(&self) -> Duration {
        self.duration.saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_accepts_all_steps() {
        for step in RATE_STEPS {
            assert_eq!(PlaybackRate::new(step).unwrap().get(), step);
        }
    }

    #[test]
    fn test_rate_rejects_off_step_values() {
        for rate in [0.3, 0.0, -1.0, 4.0, 1.001] {
            assert!(matches!(
                PlaybackRate::new(rate),
                Err(PlayerError::InvalidRate(_))
            ));
        }
    }

    #[test]
    fn test_progress_zero_while_duration_unknown() {
        let snapshot = PlaybackSnapshot::new(1.0);
        assert_eq!(snapshot.progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_percent() {
        let mut snapshot = PlaybackSnapshot::new(1.0);
        snapshot.position = Duration::from_secs(30);
        snapshot.duration = Duration::from_secs(120);
        assert_eq!(snapshot.progress_percent(), 25.0);
        assert_eq!(snapshot.time_remaining(), Duration::from_secs(90));
    }

    #[test]
    fn test_reset_keeps_audio_settings() {
        let mut snapshot = PlaybackSnapshot::new(0.4);
        snapshot.is_loading = false;
        snapshot.position = Duration::from_secs(10);
        snapshot.duration = Duration::from_secs(60);
        snapshot.muted = true;
        snapshot.rate = PlaybackRate::new(1.5).unwrap();

        snapshot.reset_for_new_source();

        assert!(snapshot.is_loading);
        assert_eq!(snapshot.position, Duration::ZERO);
        assert_eq!(snapshot.duration, Duration::ZERO);
        assert_eq!(snapshot.volume, 0.4);
        assert!(snapshot.muted);
        assert_eq!(snapshot.rate.get(), 1.5);
    }
}
