use snapscroll_core::snap::{Anchor, ScrollSurface};
use snapscroll_core::Vec2;

/// Content strip holding every page side by side
///
/// The terminal has no inertial scrolling, so `stop_movement` keeps the default no-op.
#[derive(Debug, Clone, Default)]
pub struct PagedContent {
    offset: Vec2,
}

impl PagedContent {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    /// Move the content horizontally by a drag delta in world units
    pub fn drag_by(&mut self, dx: f64) {
        self.offset += Vec2::new(dx, 0.0);
    }
}

impl Anchor for PagedContent {
    fn anchored_position(&self) -> Vec2 {
        self.offset
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.offset = position;
    }
}

impl ScrollSurface for PagedContent {}
