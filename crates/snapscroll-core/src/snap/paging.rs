//! L4 Atomic Layer: Drag-to-page decision
//!
//! Classifies a finished drag gesture as stay, advance or retreat. Pure
//! functions over the paging state; the view applies the result.

use crate::config::SnapConfig;

use super::gesture::DragSamples;

/// Page position and thresholds of a snap scroll surface
#[derive(Debug, Clone, PartialEq)]
pub struct PagingState {
    page: usize,
    max_page: usize,
    /// Width of one page in world units
    pub page_size: f64,
    /// Minimum single-frame drag delta that counts as a flick
    pub scrollable_distance: f64,
}

impl PagingState {
    pub fn new(page: usize, max_page: usize, page_size: f64, scrollable_distance: f64) -> Self {
        Self {
            page: page.min(max_page),
            max_page,
            page_size,
            scrollable_distance,
        }
    }

    pub fn from_config(config: &SnapConfig) -> Self {
        Self::new(
            config.page,
            config.max_page,
            config.page_size,
            config.scrollable_distance,
        )
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the page, clamped to `[0, max_page]`
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.max_page);
    }

    #[inline]
    pub fn max_page(&self) -> usize {
        self.max_page
    }

    /// Set the highest page, pulling the current page down if needed
    pub fn set_max_page(&mut self, max_page: usize) {
        self.max_page = max_page;
        self.page = self.page.min(max_page);
    }

    /// Content x offset at which `page` rests
    #[inline]
    pub fn resting_offset(&self, page: usize) -> f64 {
        0.0 - self.page_size * page as f64
    }
}

/// Horizontal paging direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher page indices
    Forward,
    /// Toward lower page indices
    Backward,
}

impl Direction {
    /// Non-negative deltas point forward
    #[inline]
    fn of(delta: f64) -> Self {
        if delta >= 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Why a gesture asked for a page change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Content was dragged at least half a page away from rest
    Forced(Direction),
    /// Last-frame movement reached the flick threshold
    Flick(Direction),
    /// Neither threshold was reached
    None,
}

impl Trigger {
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Trigger::Forced(direction) | Trigger::Flick(direction) => Some(direction),
            Trigger::None => None,
        }
    }
}

/// Inputs sampled when a drag gesture is released
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Content's local x offset at release
    pub content_offset_x: f64,
    pub samples: DragSamples,
}

/// Outcome of classifying a released gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDecision {
    pub trigger: Trigger,
    /// Signed distance from the current page's resting offset
    pub page_dx: f64,
    /// One-frame drag movement
    pub drag_dx: f64,
    /// Page to settle on
    pub page: usize,
}

impl PageDecision {
    pub fn changed(&self, from: usize) -> bool {
        self.page != from
    }
}

/// Classify a released gesture against the paging state
pub fn decide(state: &PagingState, release: &DragRelease) -> PageDecision {
    let page_dx = state.resting_offset(state.page) - release.content_offset_x;
    let drag_dx = release.samples.drag_dx();

    let trigger = if page_dx.abs() >= state.page_size / 2.0 {
        Trigger::Forced(Direction::of(page_dx))
    } else if drag_dx.abs() >= state.scrollable_distance {
        Trigger::Flick(Direction::of(drag_dx))
    } else {
        Trigger::None
    };

    PageDecision {
        trigger,
        page_dx,
        drag_dx,
        page: apply(state.page, state.max_page, trigger.direction()),
    }
}

/// Step one page in `direction`, absorbing moves past either end
pub fn apply(page: usize, max_page: usize, direction: Option<Direction>) -> usize {
    match direction {
        Some(Direction::Forward) if page < max_page => page + 1,
        Some(Direction::Backward) if page >= 1 => page - 1,
        _ => page,
    }
}
