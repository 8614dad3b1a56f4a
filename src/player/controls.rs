/// Control visibility state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsState {
    /// Control surface is hidden
    Hidden,
    /// Control surface is visible
    Visible,
}

/// Show/hide policy for the transient control surface.
///
/// Showing is unconditional on hover; hiding is not. Controls stay up while
/// playback is paused, and a pointer exit toward the control surface itself
/// is a re-entrant transition, not a real exit. The asymmetry keeps the
/// controls from flickering during active use.
#[derive(Debug)]
pub struct ControlsVisibility {
    state: ControlsState,
}

impl ControlsVisibility {
    pub fn new() -> Self {
        Self {
            state: ControlsState::Hidden,
        }
    }

    pub fn pointer_entered(&mut self) {
        self.state = ControlsState::Visible;
    }

    pub fn pointer_left(&mut self, to_control_surface: bool, is_playing: bool) {
        if is_playing && !to_control_surface {
            self.state = ControlsState::Hidden;
        }
    }

    pub fn visible(&self) -> bool {
        matches!(self.state, ControlsState::Visible)
    }
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self::new()
    }
}
