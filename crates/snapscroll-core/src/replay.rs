//! Headless replay of scripted gestures
//!
//! Drives a [`SnapScrollView`] over a plain [`Vec2`] surface from a JSON
//! script and records the state after every event. Used by the CLI
//! `simulate` command and by tests.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::{SnapConfig, TweenSettings};
use crate::geometry::Vec2;
use crate::snap::{Anchor, PageChanged, SnapScrollView, TweenState};

/// A scripted interaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    /// Paging overrides; defaults apply when absent
    #[serde(default)]
    pub paging: Option<SnapConfig>,
    /// Tween overrides; defaults apply when absent
    #[serde(default)]
    pub tween: Option<TweenSettings>,
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Start a drag at the content's current offset
    Begin,
    /// Move the content to an absolute offset and sample it
    Drag(Vec2),
    /// Move the content by a relative amount and sample it
    DragBy(Vec2),
    /// Release the drag
    End,
    /// Advance one frame
    Tick(f64),
    /// Advance several equal frames
    Frames { count: u32, dt: f64 },
    /// Programmatically set the page
    SetPage(usize),
    /// Re-apply the current page
    Refresh {
        #[serde(default = "default_animate")]
        animate: bool,
    },
}

fn default_animate() -> bool {
    true
}

/// View state recorded after one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub index: usize,
    pub event: ScriptEvent,
    pub page: usize,
    pub offset: Vec2,
    pub tween: TweenState,
    /// Page-change notifications fired so far
    pub notifications: usize,
}

impl Script {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let script: Script = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if let Some(paging) = &self.paging {
            paging
                .validate()
                .map_err(|e| crate::Error::Script(e.to_string()))?;
        }
        if let Some(tween) = &self.tween {
            tween
                .validate()
                .map_err(|e| crate::Error::Script(e.to_string()))?;
        }
        for (index, event) in self.events.iter().enumerate() {
            let dt = match event {
                ScriptEvent::Tick(dt) | ScriptEvent::Frames { dt, .. } => *dt,
                _ => continue,
            };
            if !dt.is_finite() || dt < 0.0 {
                return Err(crate::Error::Script(format!(
                    "event {}: frame delta must be non-negative, got {}",
                    index, dt
                )));
            }
        }
        Ok(())
    }
}

/// Runs scripts against a fresh view
pub struct Replay {
    view: SnapScrollView<Vec2>,
    notifications: Rc<Cell<usize>>,
}

impl Replay {
    pub fn new(paging: &SnapConfig, tween: TweenSettings) -> Self {
        let mut view = SnapScrollView::from_config(Vec2::ZERO, paging, tween);
        let rest = view.paging().resting_offset(view.page());
        view.surface_mut().set_anchored_position(Vec2::new(rest, 0.0));

        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        view.on_page_changed(move |event: &PageChanged| {
            counter.set(counter.get() + 1);
            tracing::trace!(page = event.page, "Replay page changed");
        });

        Self {
            view,
            notifications,
        }
    }

    pub fn from_script(script: &Script) -> Self {
        Self::new(
            &script.paging.clone().unwrap_or_default(),
            script.tween.unwrap_or_default(),
        )
    }

    /// Validate and run a whole script
    pub fn run(script: &Script) -> crate::Result<Vec<TraceEntry>> {
        script.validate()?;
        let mut replay = Self::from_script(script);
        Ok(script
            .events
            .iter()
            .enumerate()
            .map(|(index, event)| replay.apply(index, event))
            .collect())
    }

    pub fn view(&self) -> &SnapScrollView<Vec2> {
        &self.view
    }

    /// Apply one event and snapshot the resulting state
    pub fn apply(&mut self, index: usize, event: &ScriptEvent) -> TraceEntry {
        match event {
            ScriptEvent::Begin => {
                let offset = self.view.content_offset();
                self.view.on_gesture_begin(offset);
            }
            ScriptEvent::Drag(position) => self.drag_to(*position),
            ScriptEvent::DragBy(delta) => {
                let position = self.view.content_offset() + *delta;
                self.drag_to(position);
            }
            ScriptEvent::End => {
                if self.view.on_gesture_end().is_none() {
                    tracing::debug!(index, "Release without an active drag ignored");
                }
            }
            ScriptEvent::Tick(dt) => self.view.update(*dt),
            ScriptEvent::Frames { count, dt } => {
                for _ in 0..*count {
                    self.view.update(*dt);
                }
            }
            ScriptEvent::SetPage(page) => self.view.set_page(*page),
            ScriptEvent::Refresh { animate } => self.view.refresh_page(*animate),
        }

        TraceEntry {
            index,
            event: event.clone(),
            page: self.view.page(),
            offset: self.view.content_offset(),
            tween: self.view.tween().state(),
            notifications: self.notifications.get(),
        }
    }

    fn drag_to(&mut self, position: Vec2) {
        if !self.view.is_dragging() {
            tracing::debug!("Drag sample without an active gesture ignored");
            return;
        }
        self.view.surface_mut().set_anchored_position(position);
        self.view.on_gesture_sample(position);
    }
}
