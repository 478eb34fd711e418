//! L4 Atomic Layer: Pure easing functions for tween animations
//!
//! Each curve maps normalized time in [0, 1] to interpolation progress.
//! Progress is 0 at the start and 1 at the end; in between some curves leave
//! [0, 1] slightly, which is expected.

use std::f64::consts::PI;

pub use crate::config::EasingCurve;

/// Easing function type: normalized time to progress
pub type EasingFn = fn(f64) -> f64;

/// Boundary tolerance for the exponential family
const EXPO_EPSILON: f64 = f64::EPSILON;

impl EasingCurve {
    /// The pure function backing this curve
    pub fn function(self) -> EasingFn {
        match self {
            EasingCurve::Linear => linear,
            EasingCurve::InQuad => in_quad,
            EasingCurve::OutQuad => out_quad,
            EasingCurve::InOutQuad => in_out_quad,
            EasingCurve::InCubic => in_cubic,
            EasingCurve::OutCubic => out_cubic,
            EasingCurve::InOutCubic => in_out_cubic,
            EasingCurve::InQuart => in_quart,
            EasingCurve::OutQuart => out_quart,
            EasingCurve::InOutQuart => in_out_quart,
            EasingCurve::InQuint => in_quint,
            EasingCurve::OutQuint => out_quint,
            EasingCurve::InOutQuint => in_out_quint,
            EasingCurve::InSine => in_sine,
            EasingCurve::OutSine => out_sine,
            EasingCurve::InOutSine => in_out_sine,
            EasingCurve::InExpo => in_expo,
            EasingCurve::OutExpo => out_expo,
            EasingCurve::InOutExpo => in_out_expo,
            EasingCurve::InCirc => in_circ,
            EasingCurve::OutCirc => out_circ,
            EasingCurve::InOutCirc => in_out_circ,
        }
    }

    /// Apply the curve to a normalized time value
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t)
    }
}

/// Progress of a tween `elapsed` seconds into a run of `duration` seconds
///
/// `duration` must be positive; callers validate it at configuration time.
#[inline]
pub fn evaluate(elapsed: f64, duration: f64, curve: EasingCurve) -> f64 {
    curve.apply(elapsed / duration)
}

/// Like [`evaluate`], selecting the curve by numeric tag
///
/// Unknown tags yield 0.
pub fn evaluate_tag(elapsed: f64, duration: f64, tag: usize) -> f64 {
    EasingCurve::from_index(tag).map_or(0.0, |curve| evaluate(elapsed, duration, curve))
}

#[inline]
fn linear(t: f64) -> f64 {
    t
}

/// Polynomial ease-in: t^n
#[inline]
fn power_in(t: f64, n: i32) -> f64 {
    t.powi(n)
}

/// Polynomial ease-out: 1 - (1-t)^n
#[inline]
fn power_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// Ease-in over the first half, ease-out over the second, each covering half the progress
#[inline]
fn power_in_out(t: f64, n: i32) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t.powi(n)
    } else {
        1.0 - 0.5 * (2.0 - t).powi(n)
    }
}

fn in_quad(t: f64) -> f64 {
    power_in(t, 2)
}

fn out_quad(t: f64) -> f64 {
    power_out(t, 2)
}

fn in_out_quad(t: f64) -> f64 {
    power_in_out(t, 2)
}

fn in_cubic(t: f64) -> f64 {
    power_in(t, 3)
}

fn out_cubic(t: f64) -> f64 {
    power_out(t, 3)
}

fn in_out_cubic(t: f64) -> f64 {
    power_in_out(t, 3)
}

fn in_quart(t: f64) -> f64 {
    power_in(t, 4)
}

fn out_quart(t: f64) -> f64 {
    power_out(t, 4)
}

fn in_out_quart(t: f64) -> f64 {
    power_in_out(t, 4)
}

fn in_quint(t: f64) -> f64 {
    power_in(t, 5)
}

fn out_quint(t: f64) -> f64 {
    power_out(t, 5)
}

fn in_out_quint(t: f64) -> f64 {
    power_in_out(t, 5)
}

fn in_sine(t: f64) -> f64 {
    1.0 - (t * PI * 0.5).cos()
}

fn out_sine(t: f64) -> f64 {
    (t * PI * 0.5).sin()
}

fn in_out_sine(t: f64) -> f64 {
    0.5 * (1.0 - (PI * t).cos())
}

fn in_expo(t: f64) -> f64 {
    if t.abs() < EXPO_EPSILON {
        return 0.0;
    }
    2.0_f64.powf(10.0 * (t - 1.0))
}

fn out_expo(t: f64) -> f64 {
    if (t - 1.0).abs() < EXPO_EPSILON {
        return 1.0;
    }
    1.0 - 2.0_f64.powf(-10.0 * t)
}

fn in_out_expo(t: f64) -> f64 {
    if t.abs() < EXPO_EPSILON {
        return 0.0;
    }
    if (t - 1.0).abs() < EXPO_EPSILON {
        return 1.0;
    }
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * 2.0_f64.powf(10.0 * (t - 1.0))
    } else {
        0.5 * (2.0 - 2.0_f64.powf(-10.0 * (t - 1.0)))
    }
}

fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

fn out_circ(t: f64) -> f64 {
    let t = t - 1.0;
    (1.0 - t * t).sqrt()
}

fn in_out_circ(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * (1.0 - (1.0 - t * t).sqrt())
    } else {
        let t = t - 2.0;
        0.5 * ((1.0 - t * t).sqrt() + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for duration in [0.016, 0.5, 3.0] {
            for curve in EasingCurve::ALL {
                let start = evaluate(0.0, duration, curve);
                let end = evaluate(duration, duration, curve);
                assert!(start.abs() < 1e-9, "{:?} at t=0 gave {}", curve, start);
                assert!((end - 1.0).abs() < 1e-9, "{:?} at t=d gave {}", curve, end);
            }
        }
    }

    #[test]
    fn test_linear_midpoint_exact() {
        assert_eq!(evaluate(0.25, 0.5, EasingCurve::Linear), 0.5);
        assert_eq!(evaluate(1.5, 3.0, EasingCurve::Linear), 0.5);
    }

    #[test]
    fn test_out_quart_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let elapsed = 0.5 * i as f64 / 100.0;
            let v = evaluate(elapsed, 0.5, EasingCurve::OutQuart);
            assert!(v >= prev, "OutQuart not monotonic at {}", elapsed);
            prev = v;
        }
    }

    #[test]
    fn test_in_out_midpoint_continuity() {
        for curve in [
            EasingCurve::InOutQuad,
            EasingCurve::InOutCubic,
            EasingCurve::InOutQuart,
            EasingCurve::InOutQuint,
            EasingCurve::InOutSine,
            EasingCurve::InOutExpo,
        ] {
            let below = curve.apply(0.5 - 1e-9);
            let above = curve.apply(0.5 + 1e-9);
            assert!((curve.apply(0.5) - 0.5).abs() < 1e-6, "{:?} midpoint", curve);
            assert!((above - below).abs() < 1e-6, "{:?} jumps at midpoint", curve);
        }

        // Circular in-out is vertical at the midpoint but still meets at 0.5
        assert_eq!(EasingCurve::InOutCirc.apply(0.5), 0.5);
    }

    #[test]
    fn test_in_out_is_symmetric() {
        for curve in [EasingCurve::InOutQuad, EasingCurve::InOutCubic, EasingCurve::InOutCirc] {
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let sum = curve.apply(t) + curve.apply(1.0 - t);
                assert!((sum - 1.0).abs() < 1e-9, "{:?} not symmetric at {}", curve, t);
            }
        }
    }

    #[test]
    fn test_known_values() {
        assert!((EasingCurve::InQuad.apply(0.5) - 0.25).abs() < 1e-12);
        assert!((EasingCurve::OutQuad.apply(0.5) - 0.75).abs() < 1e-12);
        assert!((EasingCurve::InCubic.apply(0.5) - 0.125).abs() < 1e-12);
        assert!((EasingCurve::OutQuint.apply(0.5) - 0.96875).abs() < 1e-12);
        assert!((EasingCurve::OutSine.apply(1.0 / 3.0) - 0.5).abs() < 1e-12);
        assert!((EasingCurve::InExpo.apply(0.9) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_expo_guards_boundaries() {
        // Without the guard 2^-10 would leak through at the start
        assert_eq!(EasingCurve::InExpo.apply(0.0), 0.0);
        assert_eq!(EasingCurve::OutExpo.apply(1.0), 1.0);
        assert_eq!(EasingCurve::InOutExpo.apply(0.0), 0.0);
        assert_eq!(EasingCurve::InOutExpo.apply(1.0), 1.0);
        assert!(EasingCurve::InExpo.apply(0.0001) > 0.0);
    }

    #[test]
    fn test_evaluate_tag() {
        assert_eq!(evaluate_tag(0.25, 0.5, 0), 0.5);
        assert_eq!(evaluate_tag(0.5, 0.5, 8), 1.0);
        assert_eq!(evaluate_tag(0.5, 0.5, 22), 0.0);
        assert_eq!(evaluate_tag(0.25, 0.5, usize::MAX), 0.0);
    }
}
