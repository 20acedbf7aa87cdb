//! Time helpers for the frame loop and the simulation clock.
//! Frame times are reported in milliseconds (f32/f64), simulation time in seconds (f64).

/// Time in seconds, as used by the simulation clock
pub type Seconds = f64;

/// Time constants for conversions
pub mod constants {
    pub const MILLIS_PER_SECOND: f64 = 1_000.0;
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Convert seconds to milliseconds
#[inline]
pub fn secs_to_millis(seconds: Seconds) -> f64 {
    seconds * constants::MILLIS_PER_SECOND
}

/// Convert milliseconds to seconds
#[inline]
pub fn millis_to_secs(millis: f64) -> Seconds {
    millis / constants::MILLIS_PER_SECOND
}

/// Frames per second for a given frame time in milliseconds.
/// Non-positive frame times yield 0.
#[inline]
pub fn fps_from_millis(millis: f64) -> f64 {
    if millis <= 0.0 {
        0.0
    } else {
        constants::MILLIS_PER_SECOND / millis
    }
}

/// Format a clock value as HH:MM:SS.mmm
pub fn format_clock(seconds: Seconds) -> String {
    let total = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let total_millis = (total * constants::MILLIS_PER_SECOND).floor() as u64;
    let millis = total_millis % 1000;
    let whole_seconds = total_millis / 1000;
    let hours = whole_seconds / constants::SECONDS_PER_HOUR as u64;
    let minutes = (whole_seconds % constants::SECONDS_PER_HOUR as u64)
        / constants::SECONDS_PER_MINUTE as u64;
    let secs = whole_seconds % constants::SECONDS_PER_MINUTE as u64;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_millis_conversion() {
        assert_eq!(secs_to_millis(1.5), 1500.0);
        assert!((millis_to_secs(1500.0) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_fps_from_millis() {
        assert!((fps_from_millis(16.0) - 62.5).abs() < 1e-9);
        assert_eq!(fps_from_millis(0.0), 0.0);
        assert_eq!(fps_from_millis(-3.0), 0.0);
    }

    #[test]
    fn test_format_clock() {
        // 1 hour, 1 minute, 1.5 seconds
        assert_eq!(format_clock(3661.5), "01:01:01.500");
        assert_eq!(format_clock(0.0), "00:00:00.000");
    }

    #[test]
    fn test_format_clock_clamps_invalid() {
        assert_eq!(format_clock(-5.0), "00:00:00.000");
        assert_eq!(format_clock(f64::NAN), "00:00:00.000");
    }

    #[test]
    fn test_format_clock_large_values() {
        assert_eq!(format_clock(100.0 * 3600.0), "100:00:00.000");
    }
}
