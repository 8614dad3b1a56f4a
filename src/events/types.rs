use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notification emitted by the player controller for interested observers
/// (the rendering layer, session logging).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEvent {
    pub event_type: PlayerEventType,
    pub payload: EventPayload,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl PlayerEvent {
    pub fn new(event_type: PlayerEventType, payload: EventPayload) -> Self {
        Self {
            event_type,
            payload,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerEventType {
    PlaybackStarted,
    PlaybackPaused,
    PositionUpdated,
    SourceChanged,
    FullscreenChanged,
}

impl PlayerEventType {
    /// Get a string representation for filtering/routing
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerEventType::PlaybackStarted => "playback.started",
            PlayerEventType::PlaybackPaused => "playback.paused",
            PlayerEventType::PositionUpdated => "playback.position_updated",
            PlayerEventType::SourceChanged => "playback.source_changed",
            PlayerEventType::FullscreenChanged => "playback.fullscreen_changed",
        }
    }
}

/// Event payload containing specific data for each event type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    Playback {
        source: String,
        position: Option<Duration>,
        duration: Option<Duration>,
    },
    Source {
        index: usize,
        source: String,
    },
    Fullscreen {
        active: bool,
    },
}
