use std::cell::Cell;
use std::rc::Rc;

use snapscroll_core::snap::{PageChanged, SnapScrollView, Trigger};
use snapscroll_core::AppConfig;

use crate::input::Action;
use crate::surface::PagedContent;
use crate::theme::Theme;

/// State the page-change listener writes and the indicator reads
#[derive(Debug, Default)]
pub struct IndicatorState {
    /// Page highlighted by the indicator row
    pub page: Cell<usize>,
    /// Page-change notifications received
    pub refreshes: Cell<u64>,
}

/// Application state for the interactive snap scroll demo
pub struct App {
    pub view: SnapScrollView<PagedContent>,
    pub config: AppConfig,
    pub theme: Theme,
    /// Width of the page area in columns; one page spans the whole width
    pub viewport_width: u16,
    pub indicator: Rc<IndicatorState>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Column of the last pointer sample while the left button is held
    pointer_column: Option<u16>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let mut view = SnapScrollView::from_app_config(PagedContent::default(), &config);

        let indicator = Rc::new(IndicatorState::default());
        let state = Rc::clone(&indicator);
        view.on_page_changed(move |event: &PageChanged| {
            state.page.set(event.page);
            state.refreshes.set(state.refreshes.get() + 1);
            tracing::debug!(page = event.page, animated = event.animated, "Page changed");
        });

        let mut app = Self {
            view,
            config,
            theme,
            viewport_width: 80,
            indicator,
            status_message: None,
            should_quit: false,
            pointer_column: None,
        };
        app.view.refresh_page(true);
        app
    }

    /// World units covered by one terminal column
    pub fn world_per_column(&self) -> f64 {
        self.view.page_size() / self.viewport_width.max(1) as f64
    }

    /// Page count for display (max page + 1)
    pub fn page_count(&self) -> usize {
        self.view.max_page() + 1
    }

    pub fn highlighted_page(&self) -> usize {
        self.indicator.page.get()
    }

    pub fn refresh_count(&self) -> u64 {
        self.indicator.refreshes.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer_column.is_some()
    }

    /// Advance one frame
    ///
    /// While a drag is held the content offset is sampled every frame, so a
    /// pointer that pauses before release records no movement.
    pub fn update(&mut self, delta: f64) {
        if self.is_dragging() {
            let offset = self.view.content_offset();
            self.view.on_gesture_sample(offset);
        }
        self.view.update(delta);
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PrevPage => {
                let page = self.view.page().saturating_sub(1);
                self.go_to_page(page, true);
            }
            Action::NextPage => {
                let page = self.view.page() + 1;
                self.go_to_page(page, true);
            }
            Action::FirstPage => self.go_to_page(0, true),
            Action::LastPage => {
                let page = self.view.max_page();
                self.go_to_page(page, true);
            }
            Action::SnapToPage => {
                let page = self.view.page();
                self.go_to_page(page, false);
            }
            Action::CycleEasing => {
                let curve = self.view.tween().curve().next();
                self.view.tween_mut().set_curve(curve);
                self.status_message = Some(format!(" Easing: {}", curve));
            }
            Action::PointerDown(column) => self.pointer_down(column),
            Action::PointerDrag(column) => self.pointer_drag(column),
            Action::PointerUp => self.pointer_up(),
            Action::None => {}
        }
    }

    /// Programmatic page change; ignored while a drag is in progress
    fn go_to_page(&mut self, page: usize, animate: bool) {
        if self.is_dragging() {
            return;
        }
        self.view.set_page(page);
        self.view.refresh_page(animate);
        self.status_message = None;
    }

    fn pointer_down(&mut self, column: u16) {
        if self.is_dragging() {
            return;
        }
        self.pointer_column = Some(column);
        let offset = self.view.content_offset();
        self.view.on_gesture_begin(offset);
    }

    fn pointer_drag(&mut self, column: u16) {
        let Some(last) = self.pointer_column else {
            return;
        };
        let dx = (column as f64 - last as f64) * self.world_per_column();
        self.view.surface_mut().drag_by(dx);
        self.pointer_column = Some(column);
    }

    fn pointer_up(&mut self) {
        if self.pointer_column.take().is_none() {
            return;
        }
        if let Some(decision) = self.view.on_gesture_end() {
            self.status_message = match decision.trigger {
                Trigger::Forced(_) => {
                    Some(format!(" Dragged past half a page -> page {}", decision.page + 1))
                }
                Trigger::Flick(_) => Some(format!(" Flick -> page {}", decision.page + 1)),
                Trigger::None => None,
            };
        }
    }
}
