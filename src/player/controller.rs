use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use super::controls::ControlsVisibility;
use super::fullscreen::FullscreenCoordinator;
use super::playlist::Playlist;
use super::traits::{FullscreenBackend, MediaElement};
use super::types::{PlaybackRate, PlaybackSnapshot};
use crate::config::Config;
use crate::events::{EventBus, EventPayload, PlayerEvent, PlayerEventType};
use crate::utils::errors::PlayerError;

/// Commands and notifications processed by the player controller.
///
/// Everything that can change playback state arrives through this one
/// enum, serialized over a single queue: user gestures routed by the input
/// router, lifecycle notifications from the media element, and state
/// queries. Media notifications carry the epoch captured when their source
/// was loaded; a stale epoch means the source was superseded and the
/// notification is dropped.
#[derive(Debug)]
pub enum PlayerCommand {
    /// Toggle between playing and paused
    TogglePlay,
    /// Relative seek in seconds; the new position arrives later via a
    /// time update
    SeekBy(f64),
    /// Seek to a fraction of the known duration
    SeekToFraction(f64),
    /// Adjust volume by a delta, clamped to [0, 1]
    VolumeDelta(f64),
    /// Set volume, clamped to [0, 1]
    VolumeSet(f64),
    /// Set playback rate; rejected if not one of the discrete steps
    RateSet {
        rate: f64,
        respond_to: Option<oneshot::Sender<Result<(), PlayerError>>>,
    },
    /// Toggle mute
    ToggleMute,
    /// Advance to the next playlist entry
    Next,
    /// Retreat to the previous playlist entry
    Previous,
    /// Pause and mark the player minimized
    Minimize,
    /// Request or exit fullscreen via the platform capability
    FullscreenToggle,

    /// Element reported the current source as loaded
    Loaded { epoch: u64, duration: Duration },
    /// Element reported playback progress
    TimeUpdate {
        epoch: u64,
        position: Duration,
        duration: Duration,
    },
    /// Element reached the end of the current source
    Ended { epoch: u64 },
    /// Pointer entered the player region
    HoverEnter,
    /// Pointer left the player region
    HoverLeave { to_control_surface: bool },
    /// Platform fullscreen-change notification
    FullscreenChanged { active: bool },

    /// Get the current playback snapshot
    GetSnapshot {
        respond_to: oneshot::Sender<PlaybackSnapshot>,
    },
    /// Get whether the control surface is shown
    GetControlsVisible { respond_to: oneshot::Sender<bool> },
    /// Get the fullscreen flag
    GetFullscreen { respond_to: oneshot::Sender<bool> },
    /// Get the minimized flag
    GetMinimized { respond_to: oneshot::Sender<bool> },
    /// Get the active source and its epoch
    GetSource {
        respond_to: oneshot::Sender<(u64, String)>,
    },
}

/// Controller that owns the playback state and processes commands
pub struct PlayerController {
    element: Arc<dyn MediaElement>,
    playlist: Playlist,
    snapshot: PlaybackSnapshot,
    controls: ControlsVisibility,
    fullscreen: FullscreenCoordinator,
    event_bus: Arc<EventBus>,
    receiver: mpsc::UnboundedReceiver<PlayerCommand>,
    /// Incremented on every source swap; stale notifications are dropped.
    epoch: u64,
    minimized: bool,
    autoplay_next: bool,
}

impl PlayerController {
    /// Create a new player controller bound to the first playlist entry.
    pub fn new(
        config: &Config,
        element: Arc<dyn MediaElement>,
        fullscreen_backend: Option<Box<dyn FullscreenBackend>>,
        event_bus: Arc<EventBus>,
    ) -> Result<(PlayerHandle, PlayerController), PlayerError> {
        let playlist = Playlist::new(config.playlist.sources.clone())?;
        let (sender, receiver) = mpsc::unbounded_channel();

        let controller = PlayerController {
            element,
            playlist,
            snapshot: PlaybackSnapshot::new(config.playback.initial_volume),
            controls: ControlsVisibility::new(),
            fullscreen: FullscreenCoordinator::new(fullscreen_backend),
            event_bus,
            receiver,
            epoch: 0,
            minimized: false,
            autoplay_next: config.playback.autoplay_next,
        };
        let handle = PlayerHandle { sender };

        Ok((handle, controller))
    }

    /// Run the controller event loop
    pub async fn run(mut self) {
        debug!("Player controller event loop started");

        if let Err(e) = self.element.load(self.playlist.current()).await {
            warn!("Failed to load initial source: {e}");
        }

        while let Some(command) = self.receiver.recv().await {
            self.handle_command(command).await;
        }

        debug!("Player controller event loop terminated");
    }

    async fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::TogglePlay => {
                if self.snapshot.is_playing {
                    trace!("Pausing playback");
                    if let Err(e) = self.element.pause().await {
                        warn!("Pause command failed: {e}");
                    }
                    self.snapshot.is_playing = false;
                    self.emit_playback_event(PlayerEventType::PlaybackPaused);
                } else {
                    trace!("Starting playback");
                    if let Err(e) = self.element.play().await {
                        warn!("Play command failed: {e}");
                    }
                    self.snapshot.is_playing = true;
                    self.emit_playback_event(PlayerEventType::PlaybackStarted);
                }
            }
            PlayerCommand::SeekBy(delta_secs) => {
                trace!("Seeking by {delta_secs}s");
                if let Err(e) = self.element.seek_by(delta_secs).await {
                    warn!("Seek command failed: {e}");
                }
            }
            PlayerCommand::SeekToFraction(fraction) => {
                // NaN would poison the Duration multiply below; non-finite
                // input collapses to the origin.
                let fraction = if fraction.is_finite() {
                    fraction.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                // Unknown duration makes this a seek to zero, not an error.
                let target = self.snapshot.duration.mul_f64(fraction);
                trace!("Seeking to {target:?} ({:.1}%)", fraction * 100.0);
                if let Err(e) = self.element.seek_to(target).await {
                    warn!("Seek command failed: {e}");
                }
            }
            PlayerCommand::VolumeDelta(delta) => {
                self.set_volume(self.snapshot.volume + delta).await;
            }
            PlayerCommand::VolumeSet(volume) => {
                self.set_volume(volume).await;
            }
            PlayerCommand::RateSet { rate, respond_to } => {
                let result = self.set_rate(rate).await;
                match respond_to {
                    Some(tx) => {
                        let _ = tx.send(result);
                    }
                    None => {
                        if let Err(e) = result {
                            warn!("{e}");
                        }
                    }
                }
            }
            PlayerCommand::ToggleMute => {
                self.snapshot.muted = !self.snapshot.muted;
                trace!("Mute toggled to {}", self.snapshot.muted);
                if let Err(e) = self.element.toggle_mute().await {
                    warn!("Mute command failed: {e}");
                }
            }
            PlayerCommand::Next => {
                let resume = self.snapshot.is_playing;
                self.playlist.advance();
                self.swap_source(resume).await;
            }
            PlayerCommand::Previous => {
                let resume = self.snapshot.is_playing;
                self.playlist.retreat();
                self.swap_source(resume).await;
            }
            PlayerCommand::Minimize => {
                if self.snapshot.is_playing {
                    if let Err(e) = self.element.pause().await {
                        warn!("Pause command failed: {e}");
                    }
                    self.snapshot.is_playing = false;
                    self.emit_playback_event(PlayerEventType::PlaybackPaused);
                }
                self.minimized = true;
                debug!("Player minimized");
            }
            PlayerCommand::FullscreenToggle => {
                self.fullscreen.toggle();
            }

            PlayerCommand::Loaded { epoch, duration } => {
                if self.is_stale(epoch, "loaded") {
                    return;
                }
                debug!("Source loaded, duration {duration:?}");
                self.snapshot.is_loading = false;
                self.snapshot.duration = duration;
            }
            PlayerCommand::TimeUpdate {
                epoch,
                position,
                duration,
            } => {
                if self.is_stale(epoch, "time update") {
                    return;
                }
                // Last write wins; the element is authoritative for both.
                self.snapshot.position = position;
                self.snapshot.duration = duration;
                self.emit_playback_event(PlayerEventType::PositionUpdated);
            }
            PlayerCommand::Ended { epoch } => {
                if self.is_stale(epoch, "ended") {
                    return;
                }
                info!("Source ended, advancing playlist");
                self.playlist.advance();
                self.swap_source(self.autoplay_next).await;
            }
            PlayerCommand::HoverEnter => {
                self.controls.pointer_entered();
            }
            PlayerCommand::HoverLeave { to_control_surface } => {
                self.controls
                    .pointer_left(to_control_surface, self.snapshot.is_playing);
            }
            PlayerCommand::FullscreenChanged { active } => {
                debug!("Fullscreen changed to {active}");
                self.fullscreen.on_platform_change(active);
                self.event_bus.emit_fullscreen_changed(active);
            }

            PlayerCommand::GetSnapshot { respond_to } => {
                let _ = respond_to.send(self.snapshot.clone());
            }
            PlayerCommand::GetControlsVisible { respond_to } => {
                let _ = respond_to.send(self.controls.visible());
            }
            PlayerCommand::GetFullscreen { respond_to } => {
                let _ = respond_to.send(self.fullscreen.is_active());
            }
            PlayerCommand::GetMinimized { respond_to } => {
                let _ = respond_to.send(self.minimized);
            }
            PlayerCommand::GetSource { respond_to } => {
                let _ = respond_to.send((self.epoch, self.playlist.current().to_string()));
            }
        }
    }

    /// Clamp and apply a volume. Non-finite values would break the
    /// `[0, 1]` invariant through `clamp`, so they fall back to silent.
    async fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        trace!("Setting volume to {volume}");
        self.snapshot.volume = volume;
        if let Err(e) = self.element.set_volume(volume).await {
            warn!("Volume command failed: {e}");
        }
    }

    async fn set_rate(&mut self, rate: f64) -> Result<(), PlayerError> {
        let rate = PlaybackRate::new(rate)?;
        trace!("Setting playback rate to {rate}");
        self.snapshot.rate = rate;
        if let Err(e) = self.element.set_rate(rate.get()).await {
            warn!("Rate command failed: {e}");
        }
        Ok(())
    }

    /// Load the playlist's current source after a cursor change. The
    /// snapshot is reset because position and duration belong to the old
    /// source; the playing/paused disposition is set from `resume`.
    async fn swap_source(&mut self, resume: bool) {
        self.epoch += 1;
        self.snapshot.reset_for_new_source();
        self.snapshot.is_playing = resume;

        let index = self.playlist.current_index();
        let source = self.playlist.current().to_string();
        info!("Switching to source {index} (epoch {})", self.epoch);

        if let Err(e) = self.element.load(&source).await {
            warn!("Failed to load source: {e}");
        }
        if resume {
            if let Err(e) = self.element.play().await {
                warn!("Play command failed: {e}");
            }
        }

        self.event_bus.emit_source_changed(index, source);
        if resume {
            self.emit_playback_event(PlayerEventType::PlaybackStarted);
        }
    }

    fn is_stale(&self, epoch: u64, kind: &str) -> bool {
        if epoch != self.epoch {
            debug!(
                "Discarding stale {kind} notification (epoch {epoch}, current {})",
                self.epoch
            );
            true
        } else {
            false
        }
    }

    fn emit_playback_event(&self, event_type: PlayerEventType) {
        self.event_bus.publish(PlayerEvent::new(
            event_type,
            EventPayload::Playback {
                source: self.playlist.current().to_string(),
                position: Some(self.snapshot.position),
                duration: Some(self.snapshot.duration),
            },
        ));
    }
}

/// Handle to send commands to the player controller
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    sender: mpsc::UnboundedSender<PlayerCommand>,
}

impl PlayerHandle {
    /// Send a command to the controller queue. Used directly for commands
    /// produced by the input router.
    pub fn dispatch(&self, command: PlayerCommand) -> Result<(), PlayerError> {
        self.sender
            .send(command)
            .map_err(|_| PlayerError::Disconnected)
    }

    pub fn toggle_play(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::TogglePlay)
    }

    pub fn seek_by(&self, delta_secs: f64) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::SeekBy(delta_secs))
    }

    pub fn seek_to_fraction(&self, fraction: f64) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::SeekToFraction(fraction))
    }

    pub fn volume_delta(&self, delta: f64) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::VolumeDelta(delta))
    }

    pub fn volume_set(&self, volume: f64) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::VolumeSet(volume))
    }

    /// Set the playback rate, waiting for validation. Values outside the
    /// discrete steps are rejected and leave the rate unchanged.
    pub async fn set_rate(&self, rate: f64) -> Result<(), PlayerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PlayerCommand::RateSet {
                rate,
                respond_to: Some(respond_to),
            })
            .map_err(|_| PlayerError::Disconnected)?;
        response.await.map_err(|_| PlayerError::Disconnected)?
    }

    pub fn toggle_mute(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::ToggleMute)
    }

    pub fn next(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::Next)
    }

    pub fn previous(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::Previous)
    }

    pub fn minimize(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::Minimize)
    }

    pub fn toggle_fullscreen(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::FullscreenToggle)
    }

    /// Notify that the source loaded for the given epoch.
    pub fn notify_loaded(&self, epoch: u64, duration: Duration) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::Loaded { epoch, duration })
    }

    /// Notify playback progress for the given epoch.
    pub fn notify_time_update(
        &self,
        epoch: u64,
        position: Duration,
        duration: Duration,
    ) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::TimeUpdate {
            epoch,
            position,
            duration,
        })
    }

    /// Notify end of stream for the given epoch.
    pub fn notify_ended(&self, epoch: u64) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::Ended { epoch })
    }

    pub fn notify_hover_enter(&self) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::HoverEnter)
    }

    pub fn notify_hover_leave(&self, to_control_surface: bool) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::HoverLeave { to_control_surface })
    }

    /// Forward the platform's fullscreen-change notification.
    pub fn notify_fullscreen_change(&self, active: bool) -> Result<(), PlayerError> {
        self.dispatch(PlayerCommand::FullscreenChanged { active })
    }

    /// Get the current playback snapshot
    pub async fn snapshot(&self) -> Result<PlaybackSnapshot, PlayerError> {
        self.query(|respond_to| PlayerCommand::GetSnapshot { respond_to })
            .await
    }

    /// Get whether the control surface is shown
    pub async fn controls_visible(&self) -> Result<bool, PlayerError> {
        self.query(|respond_to| PlayerCommand::GetControlsVisible { respond_to })
            .await
    }

    /// Get the fullscreen flag
    pub async fn is_fullscreen(&self) -> Result<bool, PlayerError> {
        self.query(|respond_to| PlayerCommand::GetFullscreen { respond_to })
            .await
    }

    /// Get the minimized flag
    pub async fn is_minimized(&self) -> Result<bool, PlayerError> {
        self.query(|respond_to| PlayerCommand::GetMinimized { respond_to })
            .await
    }

    /// Get the active source and the epoch notifications must carry.
    pub async fn current_source(&self) -> Result<(u64, String), PlayerError> {
        self.query(|respond_to| PlayerCommand::GetSource { respond_to })
            .await
    }

    async fn query<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> PlayerCommand,
    ) -> Result<T, PlayerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(command(respond_to))
            .map_err(|_| PlayerError::Disconnected)?;
        response.await.map_err(|_| PlayerError::Disconnected)
    }
}
