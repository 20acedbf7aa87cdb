//! Monotonic timers for measuring frame and scope durations.

use std::time::{Duration, Instant};

use crate::core::time::Seconds;

/// High-resolution stopwatch backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create a timer that starts counting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart the timer from now
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Time since the last start, reset or lap
    pub fn elapsed_duration(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds since the last start, reset or lap
    #[must_use]
    pub fn elapsed(&self) -> Seconds {
        self.elapsed_duration().as_secs_f64()
    }

    /// Seconds since the last start, reset or lap; restarts the timer.
    #[must_use]
    pub fn lap(&mut self) -> Seconds {
        let now = Instant::now();
        let dt = now.duration_since(self.start).as_secs_f64();
        self.start = now;
        dt
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the elapsed seconds of its own lifetime into `result` when dropped.
///
/// ```
/// use dockshell::core::ScopedTimer;
///
/// let mut took = 0.0;
/// {
///     let _t = ScopedTimer::new(&mut took);
/// }
/// assert!(took >= 0.0);
/// ```
pub struct ScopedTimer<'a> {
    timer: Timer,
    result: &'a mut Seconds,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(result: &'a mut Seconds) -> Self {
        Self {
            timer: Timer::new(),
            result,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        *self.result = self.timer.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = Timer::new();
        let a = timer.elapsed();
        let b = timer.elapsed();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn test_lap_restarts() {
        let mut timer = Timer::new();
        thread::sleep(Duration::from_millis(5));
        let first = timer.lap();
        assert!(first >= 0.005);
        // Right after a lap the elapsed time starts over
        assert!(timer.elapsed() < first);
    }

    #[test]
    fn test_reset() {
        let mut timer = Timer::new();
        thread::sleep(Duration::from_millis(5));
        let before = timer.elapsed();
        timer.reset();
        assert!(timer.elapsed() < before);
    }

    #[test]
    fn test_scoped_timer_writes_on_drop() {
        let mut took = -1.0;
        {
            let _scope = ScopedTimer::new(&mut took);
            thread::sleep(Duration::from_millis(2));
        }
        assert!(took >= 0.002);
    }
}
