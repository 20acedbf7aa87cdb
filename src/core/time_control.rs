//! Pause / single-step / time-scale control for a simulation loop.

use crate::core::time::Seconds;

/// Smallest accepted time scale
pub const MIN_TIME_SCALE: f32 = 0.1;
/// Largest accepted time scale
pub const MAX_TIME_SCALE: f32 = 5.0;
/// Simulation delta used for a single step while paused (one 60 Hz frame)
pub const FIXED_STEP: Seconds = 1.0 / 60.0;

/// Coarse clock state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// Time advances every frame
    Running,
    /// Time advances only on explicit steps
    Paused,
}

impl ClockState {
    pub fn is_running(&self) -> bool {
        matches!(self, ClockState::Running)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, ClockState::Paused)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockState::Running => "Running",
            ClockState::Paused => "Paused",
        }
    }
}

/// Time controller for a frame-driven simulation
#[derive(Debug, Clone, PartialEq)]
pub struct TimeController {
    paused: bool,
    step_requested: bool,
    time_scale: f32,
}

impl TimeController {
    pub fn new() -> Self {
        Self {
            paused: false,
            step_requested: false,
            time_scale: 1.0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> ClockState {
        if self.paused {
            ClockState::Paused
        } else {
            ClockState::Running
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Request exactly one update on the next [`consume_step`](Self::consume_step)
    pub fn step(&mut self) {
        self.step_requested = true;
    }

    /// Returns true once per requested step and clears the request
    pub fn consume_step(&mut self) -> bool {
        std::mem::take(&mut self.step_requested)
    }

    pub fn has_pending_step(&self) -> bool {
        self.step_requested
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the time scale, clamped to [`MIN_TIME_SCALE`, `MAX_TIME_SCALE`].
    /// NaN is ignored.
    pub fn set_time_scale(&mut self, scale: f32) {
        if scale.is_nan() {
            return;
        }
        self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    pub fn reset_time_scale(&mut self) {
        self.time_scale = 1.0;
    }

    /// Back to running, no pending step, scale 1.0
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Scaled simulation delta for one frame of `real_dt` seconds.
    ///
    /// Running: `real_dt * scale`. Paused with a pending step: one
    /// [`FIXED_STEP`] scaled, consuming the step. Paused otherwise: `None`.
    pub fn advance(&mut self, real_dt: Seconds) -> Option<Seconds> {
        let scale = self.time_scale as Seconds;
        if !self.paused {
            Some(real_dt.max(0.0) * scale)
        } else if self.consume_step() {
            Some(FIXED_STEP * scale)
        } else {
            None
        }
    }
}

impl Default for TimeController {
    fn default() -> Self {
        Self::new()
    }
}
