//! Per-frame drag tracking.

use crate::geometry::Vec2;

/// The last two drag samples of a gesture, taken at release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSamples {
    /// Sample from the frame before `current`
    pub previous: Vec2,
    /// Sample from the last frame before release
    pub current: Vec2,
}

impl DragSamples {
    /// One-frame horizontal movement, positive when dragging toward -x
    #[inline]
    pub fn drag_dx(&self) -> f64 {
        self.previous.x - self.current.x
    }
}

/// Tracks the current and previous drag samples of one gesture
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    samples: Option<DragSamples>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.samples.is_some()
    }

    pub fn samples(&self) -> Option<DragSamples> {
        self.samples
    }

    /// Start a gesture
    ///
    /// Both samples start at `position` so the first frame has no spurious delta.
    pub fn begin(&mut self, position: Vec2) {
        self.samples = Some(DragSamples {
            previous: position,
            current: position,
        });
    }

    /// Record a new sample, shifting current to previous
    ///
    /// Ignored when no gesture is active.
    pub fn sample(&mut self, position: Vec2) {
        if let Some(samples) = self.samples.as_mut() {
            samples.previous = samples.current;
            samples.current = position;
        }
    }

    /// Finish the gesture, returning its final samples
    pub fn end(&mut self) -> Option<DragSamples> {
        self.samples.take()
    }
}
