//! L3 Molecular Layer: Anchor position tween
//!
//! Animates an anchor from wherever it currently is toward a target using an
//! easing curve. The host calls `step()` once per frame with the elapsed time.

use serde::Serialize;

use crate::config::{EasingCurve, LoopMode, TweenSettings};
use crate::geometry::Vec2;

use super::easing::evaluate;
use super::surface::Anchor;

/// Lifecycle of a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenState {
    /// Never run, or stopped
    #[default]
    Idle,
    /// Counting down the configured delay
    Delaying,
    /// Interpolating toward the end value
    Animating,
    /// Reached the end value with no loop
    Completed,
}

impl TweenState {
    /// Whether `step()` does any work in this state
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Delaying | Self::Animating)
    }
}

/// Anchor position tween
///
/// At most one run is live at a time. `run()` replaces the current run and
/// captures the anchor's live position as the new start, so interrupting an
/// animation never makes the anchor jump.
#[derive(Debug, Clone, Default)]
pub struct Tween {
    settings: TweenSettings,
    state: TweenState,
    /// Seconds animated in the current run
    elapsed: f64,
    /// Seconds of delay left before animating
    delay_remaining: f64,
    /// Start position captured by the last `run()`
    from: Vec2,
    /// End position of the current run
    to: Vec2,
}

impl Tween {
    pub fn new(settings: TweenSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &TweenSettings {
        &self.settings
    }

    /// Replace all settings
    ///
    /// Curve, duration and loop mode apply to the live run; delay applies from the next `run()`.
    pub fn set_settings(&mut self, settings: TweenSettings) {
        self.settings = settings;
    }

    pub fn duration(&self) -> f64 {
        self.settings.duration
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.settings.duration = duration;
    }

    pub fn delay(&self) -> f64 {
        self.settings.delay
    }

    pub fn set_delay(&mut self, delay: f64) {
        self.settings.delay = delay;
    }

    pub fn curve(&self) -> EasingCurve {
        self.settings.curve
    }

    pub fn set_curve(&mut self, curve: EasingCurve) {
        self.settings.curve = curve;
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.settings.loop_mode
    }

    pub fn set_loop_mode(&mut self, loop_mode: LoopMode) {
        self.settings.loop_mode = loop_mode;
    }

    #[inline]
    pub fn state(&self) -> TweenState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_active()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn from(&self) -> Vec2 {
        self.from
    }

    pub fn to(&self) -> Vec2 {
        self.to
    }

    /// Start animating `target` toward `to`
    ///
    /// The start value is read from the target now, not cached earlier.
    pub fn run<A: Anchor + ?Sized>(&mut self, target: &A, to: Vec2) {
        self.from = target.anchored_position();
        self.to = to;
        self.elapsed = 0.0;
        self.delay_remaining = self.settings.delay;
        self.state = if self.delay_remaining > 0.0 {
            TweenState::Delaying
        } else {
            TweenState::Animating
        };
    }

    /// Advance by `delta` seconds, writing the new position into `target`
    pub fn step<A: Anchor + ?Sized>(&mut self, delta: f64, target: &mut A) {
        match self.state {
            TweenState::Delaying => {
                // Leftover delay is not carried into the animation
                self.delay_remaining -= delta;
                if self.delay_remaining <= 0.0 {
                    self.state = TweenState::Animating;
                }
            }
            TweenState::Animating => self.advance(delta, target),
            TweenState::Idle | TweenState::Completed => {}
        }
    }

    /// Deactivate immediately, leaving the anchor where it is
    pub fn stop(&mut self) {
        if self.state.is_active() {
            self.state = TweenState::Idle;
        }
    }

    fn advance<A: Anchor + ?Sized>(&mut self, delta: f64, target: &mut A) {
        self.elapsed += delta;

        if self.elapsed < self.settings.duration {
            let progress = evaluate(self.elapsed, self.settings.duration, self.settings.curve);
            target.set_anchored_position(self.from.lerp(self.to, progress));
            return;
        }

        // Snap exactly to avoid accumulated floating error
        target.set_anchored_position(self.to);

        match self.settings.loop_mode {
            LoopMode::None => {
                self.state = TweenState::Completed;
                tracing::trace!(x = self.to.x, y = self.to.y, "Tween completed");
            }
            LoopMode::Loop => {
                // `run` reads the live position, so rewind before restarting
                target.set_anchored_position(self.from);
                let to = self.to;
                self.run(&*target, to);
                tracing::trace!("Tween looped");
            }
            LoopMode::PingPong => {
                std::mem::swap(&mut self.from, &mut self.to);
                let to = self.to;
                self.run(&*target, to);
                tracing::trace!(x = to.x, y = to.y, "Tween reversed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 0.1;

    fn tween(duration: f64, curve: EasingCurve, loop_mode: LoopMode) -> Tween {
        Tween::new(TweenSettings {
            duration,
            delay: 0.0,
            curve,
            loop_mode,
        })
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_new_tween_is_idle() {
        let mut tween = Tween::default();
        let mut anchor = Vec2::new(5.0, 5.0);
        assert_eq!(tween.state(), TweenState::Idle);
        assert!(!tween.is_running());

        tween.step(FRAME, &mut anchor);
        assert_eq!(anchor, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_linear_run_interpolates_and_completes() {
        let mut tween = tween(1.0, EasingCurve::Linear, LoopMode::None);
        let mut anchor = Vec2::ZERO;

        tween.run(&anchor, Vec2::new(100.0, 0.0));
        assert_eq!(tween.state(), TweenState::Animating);

        tween.step(0.25, &mut anchor);
        assert!(close(anchor, Vec2::new(25.0, 0.0)));

        tween.step(0.25, &mut anchor);
        assert!(close(anchor, Vec2::new(50.0, 0.0)));

        tween.step(0.6, &mut anchor);
        assert_eq!(anchor, Vec2::new(100.0, 0.0));
        assert_eq!(tween.state(), TweenState::Completed);
        assert!(!tween.is_running());

        // Further steps are no-ops
        tween.step(FRAME, &mut anchor);
        assert_eq!(anchor, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_completion_snaps_exactly() {
        let mut tween = tween(0.5, EasingCurve::OutQuart, LoopMode::None);
        let mut anchor = Vec2::new(-300.0, 0.0);
        let target = Vec2::new(-600.0, 0.0);

        tween.run(&anchor, target);
        for _ in 0..31 {
            tween.step(1.0 / 60.0, &mut anchor);
        }
        assert_eq!(anchor, target);
        assert_eq!(tween.state(), TweenState::Completed);
    }

    #[test]
    fn test_delay_holds_position() {
        let mut tween = Tween::new(TweenSettings {
            duration: 1.0,
            delay: 0.25,
            curve: EasingCurve::Linear,
            loop_mode: LoopMode::None,
        });
        let mut anchor = Vec2::ZERO;

        tween.run(&anchor, Vec2::new(10.0, 0.0));
        assert_eq!(tween.state(), TweenState::Delaying);
        assert!(tween.is_running());

        tween.step(0.2, &mut anchor);
        assert_eq!(anchor, Vec2::ZERO);
        assert_eq!(tween.state(), TweenState::Delaying);

        // Delay expires; overshoot is discarded
        tween.step(0.2, &mut anchor);
        assert_eq!(anchor, Vec2::ZERO);
        assert_eq!(tween.state(), TweenState::Animating);
        assert_eq!(tween.elapsed(), 0.0);

        tween.step(0.5, &mut anchor);
        assert!(close(anchor, Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_run_resets_delay() {
        let mut tween = Tween::new(TweenSettings {
            delay: 0.1,
            ..Default::default()
        });
        let mut anchor = Vec2::ZERO;

        tween.run(&anchor, Vec2::new(10.0, 0.0));
        tween.step(0.2, &mut anchor);
        assert_eq!(tween.state(), TweenState::Animating);

        tween.run(&anchor, Vec2::new(20.0, 0.0));
        assert_eq!(tween.state(), TweenState::Delaying);
    }

    #[test]
    fn test_stop_keeps_position() {
        let mut tween = tween(1.0, EasingCurve::Linear, LoopMode::None);
        let mut anchor = Vec2::ZERO;

        tween.run(&anchor, Vec2::new(100.0, 0.0));
        tween.step(0.3, &mut anchor);
        tween.stop();
        assert_eq!(tween.state(), TweenState::Idle);

        let held = anchor;
        tween.step(0.3, &mut anchor);
        assert_eq!(anchor, held);
    }

    #[test]
    fn test_interrupt_starts_from_live_position() {
        let mut tween = tween(1.0, EasingCurve::Linear, LoopMode::None);
        let mut anchor = Vec2::ZERO;

        tween.run(&anchor, Vec2::new(100.0, 0.0));
        tween.step(0.4, &mut anchor);
        let mid = anchor;
        assert!(close(mid, Vec2::new(40.0, 0.0)));

        tween.run(&anchor, Vec2::new(-100.0, 0.0));
        assert_eq!(tween.from(), mid);

        // A tiny step moves only a tiny distance from the interrupted position
        tween.step(0.001, &mut anchor);
        assert!(anchor.distance(mid) < 0.2 + 1e-9);
        assert!(anchor.x < mid.x);
    }

    #[test]
    fn test_loop_restarts_from_start() {
        let mut tween = tween(1.0, EasingCurve::Linear, LoopMode::Loop);
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let mut anchor = a;

        tween.run(&anchor, b);
        tween.step(1.0, &mut anchor);
        // Restarted: anchor rewound to the start, still running toward b
        assert_eq!(anchor, a);
        assert!(tween.is_running());
        assert_eq!(tween.from(), a);
        assert_eq!(tween.to(), b);

        tween.step(0.5, &mut anchor);
        assert!(close(anchor, Vec2::new(5.0, 0.0)));

        for _ in 0..5 {
            tween.step(0.5, &mut anchor);
        }
        assert!(tween.is_running());
    }

    #[test]
    fn test_ping_pong_oscillates() {
        let duration = 1.0;
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(0.0, 50.0);
        let mut tween = tween(duration, EasingCurve::InOutSine, LoopMode::PingPong);
        let mut anchor = a;

        tween.run(&anchor, b);

        tween.step(duration, &mut anchor);
        assert_eq!(anchor, b);
        assert_eq!(tween.from(), b);
        assert_eq!(tween.to(), a);

        tween.step(duration, &mut anchor);
        assert_eq!(anchor, a);

        // Keeps going without intervention
        for cycle in 0..4 {
            tween.step(duration / 2.0, &mut anchor);
            assert!(tween.is_running());
            tween.step(duration / 2.0, &mut anchor);
            let expected = if cycle % 2 == 0 { b } else { a };
            assert_eq!(anchor, expected);
        }
    }

    #[test]
    fn test_ping_pong_sampled_per_frame() {
        let mut tween = tween(0.5, EasingCurve::Linear, LoopMode::PingPong);
        let mut anchor = Vec2::ZERO;
        let end = Vec2::new(100.0, 0.0);
        tween.run(&anchor, end);

        let mut max_x: f64 = 0.0;
        for _ in 0..60 {
            tween.step(1.0 / 60.0, &mut anchor);
            max_x = max_x.max(anchor.x);
            assert!(anchor.x >= -1e-9 && anchor.x <= 100.0 + 1e-9);
        }
        assert_eq!(max_x, 100.0);
    }

    #[test]
    fn test_zero_duration_snaps_on_first_frame() {
        let mut tween = tween(0.0, EasingCurve::Linear, LoopMode::None);
        let mut anchor = Vec2::ZERO;
        tween.run(&anchor, Vec2::new(3.0, 4.0));
        tween.step(FRAME, &mut anchor);
        assert_eq!(anchor, Vec2::new(3.0, 4.0));
        assert_eq!(tween.state(), TweenState::Completed);
    }
}
