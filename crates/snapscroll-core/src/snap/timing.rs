//! L4 Atomic Layer: Frame timing utilities
//!
//! The snap system is advanced by explicit delta times. These helpers turn
//! wall-clock frames into those deltas for interactive hosts.

use std::time::{Duration, Instant};

/// Largest delta a single frame may report, in seconds
pub const DEFAULT_MAX_DELTA: f64 = 1.0 / 3.0;

/// Tick duration for a target frame rate
///
/// A rate of 0 falls back to ~60fps. Rates above 1000 are capped at 1ms so the
/// event loop never polls without waiting.
#[inline]
pub fn frame_interval(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16)
    } else {
        Duration::from_millis((1000 / fps as u64).max(1))
    }
}

/// Measures elapsed seconds between consecutive host frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_delta: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f64) -> Self {
        Self {
            last: Instant::now(),
            max_delta,
        }
    }

    /// Seconds since the previous tick, clamped to `max_delta`
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = self.delta_between(self.last, now);
        self.last = now;
        delta
    }

    fn delta_between(&self, earlier: Instant, later: Instant) -> f64 {
        later
            .saturating_duration_since(earlier)
            .as_secs_f64()
            .min(self.max_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(60), Duration::from_millis(16));
        assert_eq!(frame_interval(30), Duration::from_millis(33));
        assert_eq!(frame_interval(0), Duration::from_millis(16));
        assert_eq!(frame_interval(1000), Duration::from_millis(1));
        assert_eq!(frame_interval(5000), Duration::from_millis(1));
        assert_eq!(frame_interval(u32::MAX), Duration::from_millis(1));
    }

    #[test]
    fn test_delta_is_clamped() {
        let clock = FrameClock::with_max_delta(0.1);
        let start = Instant::now();
        let later = start + Duration::from_secs(5);
        assert!((clock.delta_between(start, later) - 0.1).abs() < 1e-12);
        assert_eq!(clock.delta_between(later, start), 0.0);
    }

    #[test]
    fn test_tick_is_non_negative() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0 && dt <= DEFAULT_MAX_DELTA);
    }
}
