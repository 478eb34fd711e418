//! L3 Molecular Layer: Snap scroll view
//!
//! Ties a host surface to the paging decision and the anchor tween. The host
//! forwards drag gestures and calls `update()` once per frame.

use crate::config::{AppConfig, SnapConfig, TweenSettings};
use crate::geometry::Vec2;

use super::gesture::DragTracker;
use super::listeners::{ListenerId, PageChanged, PageListeners};
use super::paging::{decide, DragRelease, PageDecision, PagingState};
use super::surface::ScrollSurface;
use super::tween::Tween;

/// Horizontally paged scroll surface that settles on page boundaries
#[derive(Debug)]
pub struct SnapScrollView<S: ScrollSurface> {
    surface: S,
    paging: PagingState,
    tween: Tween,
    drag: DragTracker,
    listeners: PageListeners,
}

impl<S: ScrollSurface> SnapScrollView<S> {
    pub fn new(surface: S, paging: PagingState, tween: Tween) -> Self {
        Self {
            surface,
            paging,
            tween,
            drag: DragTracker::new(),
            listeners: PageListeners::new(),
        }
    }

    pub fn from_config(surface: S, paging: &SnapConfig, tween: TweenSettings) -> Self {
        Self::new(surface, PagingState::from_config(paging), Tween::new(tween))
    }

    pub fn from_app_config(surface: S, config: &AppConfig) -> Self {
        Self::from_config(surface, &config.paging, config.tween)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Content's current local offset
    pub fn content_offset(&self) -> Vec2 {
        self.surface.anchored_position()
    }

    pub fn paging(&self) -> &PagingState {
        &self.paging
    }

    pub fn tween(&self) -> &Tween {
        &self.tween
    }

    pub fn tween_mut(&mut self) -> &mut Tween {
        &mut self.tween
    }

    #[inline]
    pub fn page(&self) -> usize {
        self.paging.page()
    }

    /// Set the page without moving the content; call `refresh_page` to apply
    pub fn set_page(&mut self, page: usize) {
        self.paging.set_page(page);
    }

    #[inline]
    pub fn max_page(&self) -> usize {
        self.paging.max_page()
    }

    pub fn set_max_page(&mut self, max_page: usize) {
        self.paging.set_max_page(max_page);
    }

    #[inline]
    pub fn page_size(&self) -> f64 {
        self.paging.page_size
    }

    pub fn set_page_size(&mut self, page_size: f64) {
        self.paging.page_size = page_size;
    }

    #[inline]
    pub fn scrollable_distance(&self) -> f64 {
        self.paging.scrollable_distance
    }

    pub fn set_scrollable_distance(&mut self, distance: f64) {
        self.paging.scrollable_distance = distance;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Register a page-change listener
    pub fn on_page_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PageChanged) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Per-frame hook: advance the page tween by `delta` seconds
    pub fn update(&mut self, delta: f64) {
        if self.tween.is_running() {
            self.tween.step(delta, &mut self.surface);
        }
    }

    /// A drag gesture started at `position`
    ///
    /// Stops the page tween so the host is the only writer during the drag.
    pub fn on_gesture_begin(&mut self, position: Vec2) {
        self.tween.stop();
        self.drag.begin(position);
    }

    /// A drag sample for the current frame
    pub fn on_gesture_sample(&mut self, position: Vec2) {
        self.drag.sample(position);
    }

    /// The drag gesture was released
    ///
    /// Decides the page and refreshes with animation. Returns `None` if no
    /// gesture was active.
    pub fn on_gesture_end(&mut self) -> Option<PageDecision> {
        let samples = self.drag.end()?;
        self.surface.stop_movement();

        let release = DragRelease {
            content_offset_x: self.surface.anchored_position().x,
            samples,
        };
        let previous = self.paging.page();
        let decision = decide(&self.paging, &release);
        self.paging.set_page(decision.page);

        tracing::debug!(
            page_dx = decision.page_dx,
            drag_dx = decision.drag_dx,
            trigger = ?decision.trigger,
            from = previous,
            to = decision.page,
            "Drag released"
        );

        self.refresh_page(true);
        Some(decision)
    }

    /// Move the content to the current page's resting offset
    ///
    /// Animates through the tween or snaps immediately. A snap also stops any
    /// running tween so later frames cannot pull the content off the page.
    /// Listeners are notified on every call, even when the page did not change.
    pub fn refresh_page(&mut self, animate: bool) {
        let mut target = self.surface.anchored_position();
        target.x = self.paging.resting_offset(self.paging.page());

        if animate {
            self.tween.run(&self.surface, target);
        } else {
            self.tween.stop();
            self.surface.set_anchored_position(target);
        }

        let event = PageChanged {
            page: self.paging.page(),
            max_page: self.paging.max_page(),
            animated: animate,
        };
        self.listeners.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EasingCurve, LoopMode};
    use crate::snap::tween::TweenState;
    use crate::snap::surface::Anchor;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn view(page: usize, max_page: usize) -> SnapScrollView<Vec2> {
        let paging = PagingState::new(page, max_page, 300.0, 2.0);
        let tween = Tween::new(TweenSettings {
            duration: 0.5,
            delay: 0.0,
            curve: EasingCurve::OutQuart,
            loop_mode: LoopMode::None,
        });
        let offset = Vec2::new(paging.resting_offset(paging.page()), 0.0);
        SnapScrollView::new(offset, paging, tween)
    }

    fn counter(view: &mut SnapScrollView<Vec2>) -> Rc<RefCell<Vec<PageChanged>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        view.on_page_changed(move |event: &PageChanged| sink.borrow_mut().push(*event));
        events
    }

    fn settle(view: &mut SnapScrollView<Vec2>) {
        for _ in 0..120 {
            view.update(1.0 / 60.0);
        }
    }

    /// Drag the content by `deltas`, one per frame, moving the content with the pointer
    fn drag(view: &mut SnapScrollView<Vec2>, deltas: &[f64]) {
        let start = view.content_offset();
        view.on_gesture_begin(start);
        for dx in deltas {
            let mut offset = view.content_offset();
            offset.x += dx;
            view.surface_mut().set_anchored_position(offset);
            view.on_gesture_sample(offset);
        }
    }

    #[test]
    fn test_forced_page_change() {
        let mut view = view(0, 2);
        let events = counter(&mut view);

        // Slow drag to -200: no single frame is a flick, but past half a page
        drag(&mut view, &[-1.0; 200]);
        assert_eq!(view.content_offset().x, -200.0);

        view.on_gesture_end();
        assert_eq!(view.page(), 1);
        assert_eq!(events.borrow().len(), 1);
        assert!(view.tween().is_running());

        settle(&mut view);
        assert_eq!(view.content_offset(), Vec2::new(-300.0, 0.0));
    }

    #[test]
    fn test_flick_page_change() {
        let mut view = view(0, 2);
        let events = counter(&mut view);

        // Net displacement is zero, the last frame moved 5 units toward -x
        drag(&mut view, &[5.0, -5.0]);
        assert_eq!(view.content_offset().x, 0.0);

        let decision = view.on_gesture_end().unwrap();
        assert_eq!(decision.drag_dx, 5.0);
        assert_eq!(view.page(), 1);
        assert_eq!(view.tween().to(), Vec2::new(-300.0, 0.0));
        assert_eq!(events.borrow()[0].page, 1);
    }

    #[test]
    fn test_backward_at_start_still_notifies() {
        let mut view = view(0, 2);
        let events = counter(&mut view);

        drag(&mut view, &[10.0, 10.0]);
        view.on_gesture_end();

        assert_eq!(view.page(), 0);
        assert_eq!(events.borrow().len(), 1);

        settle(&mut view);
        assert_eq!(view.content_offset().x, 0.0);
    }

    #[test]
    fn test_forward_at_end_is_absorbed() {
        let mut view = view(2, 2);
        drag(&mut view, &[-10.0]);
        view.on_gesture_end();
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn test_refresh_without_animation() {
        let mut view = view(0, 3);
        let events = counter(&mut view);

        view.set_page(2);
        view.refresh_page(false);

        assert_eq!(view.content_offset(), Vec2::new(-600.0, 0.0));
        assert!(!view.tween().is_running());
        assert_eq!(
            *events.borrow(),
            vec![PageChanged {
                page: 2,
                max_page: 3,
                animated: false,
            }]
        );
    }

    #[test]
    fn test_snap_during_tween_holds() {
        let mut view = view(0, 3);
        view.set_page(3);
        view.refresh_page(true);
        for _ in 0..5 {
            view.update(1.0 / 60.0);
        }
        assert!(view.tween().is_running());

        view.set_page(1);
        view.refresh_page(false);
        assert_eq!(view.content_offset(), Vec2::new(-300.0, 0.0));
        assert_eq!(view.tween().state(), TweenState::Idle);

        settle(&mut view);
        assert_eq!(view.content_offset(), Vec2::new(-300.0, 0.0));
    }

    #[test]
    fn test_refresh_keeps_y() {
        let mut view = view(0, 3);
        view.surface_mut().set_anchored_position(Vec2::new(0.0, 12.0));
        view.set_page(1);
        view.refresh_page(false);
        assert_eq!(view.content_offset(), Vec2::new(-300.0, 12.0));
    }

    #[test]
    fn test_refresh_without_change_notifies() {
        let mut view = view(1, 3);
        let events = counter(&mut view);

        view.refresh_page(true);
        view.refresh_page(true);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_gesture_begin_stops_tween() {
        let mut view = view(0, 3);
        view.set_page(3);
        view.refresh_page(true);
        view.update(0.1);
        assert!(view.tween().is_running());

        let held = view.content_offset();
        view.on_gesture_begin(held);
        assert_eq!(view.tween().state(), TweenState::Idle);

        view.update(0.1);
        assert_eq!(view.content_offset(), held);
    }

    #[test]
    fn test_gesture_end_without_begin() {
        let mut view = view(0, 3);
        let events = counter(&mut view);

        view.on_gesture_sample(Vec2::new(-50.0, 0.0));
        assert!(view.on_gesture_end().is_none());
        assert!(events.borrow().is_empty());
        assert_eq!(view.page(), 0);
    }

    #[test]
    fn test_programmatic_page_is_clamped() {
        let mut view = view(0, 2);
        view.set_page(5);
        assert_eq!(view.page(), 2);

        view.set_max_page(1);
        assert_eq!(view.page(), 1);
        assert_eq!(view.max_page(), 1);
    }

    #[test]
    fn test_remove_listener() {
        let mut view = view(0, 2);
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        let id = view.on_page_changed(move |_: &PageChanged| *sink.borrow_mut() += 1);

        view.refresh_page(false);
        assert!(view.remove_listener(id));
        view.refresh_page(false);
        assert_eq!(*events.borrow(), 1);
    }

    #[test]
    fn test_interrupted_refresh_has_no_jump() {
        let mut view = view(0, 3);
        view.set_page(2);
        view.refresh_page(true);
        for _ in 0..5 {
            view.update(1.0 / 60.0);
        }
        let before = view.content_offset();

        view.set_page(0);
        view.refresh_page(true);
        assert_eq!(view.tween().from(), before);

        view.update(1.0 / 60.0);
        let after = view.content_offset();
        assert!(after.x > before.x);
        assert!((after.x - before.x).abs() < 100.0);
    }
}
