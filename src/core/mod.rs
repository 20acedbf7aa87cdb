//! Core frame-loop utilities.
//!
//! Timers, the frame-time ring buffer and the simulation time controller.
//! Nothing here depends on the GUI toolkit.

pub mod frame_history;
pub mod time;
pub mod time_control;
pub mod timer;

pub use frame_history::FrameTimeHistory;
pub use time::Seconds;
pub use time_control::{ClockState, TimeController};
pub use timer::{ScopedTimer, Timer};
