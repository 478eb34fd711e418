//! Seams between the snap system and the host that owns the content.

use crate::geometry::Vec2;

/// Something with an anchored position a tween may write
pub trait Anchor {
    fn anchored_position(&self) -> Vec2;

    fn set_anchored_position(&mut self, position: Vec2);
}

impl Anchor for Vec2 {
    #[inline]
    fn anchored_position(&self) -> Vec2 {
        *self
    }

    #[inline]
    fn set_anchored_position(&mut self, position: Vec2) {
        *self = position;
    }
}

/// Host scrollable surface
///
/// The anchored position is the content's local offset from its resting frame.
pub trait ScrollSurface: Anchor {
    /// Halt any inertial movement the host applies to the content
    fn stop_movement(&mut self) {}
}

impl ScrollSurface for Vec2 {}
