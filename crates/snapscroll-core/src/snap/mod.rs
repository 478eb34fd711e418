//! Snap scrolling system
//!
//! A horizontally paged surface that settles on page boundaries after a drag,
//! plus the tween that animates its content anchor.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves (power, sine, exponential, circular)
//! - `timing` - Frame delta utilities
//! - `paging` - Drag-to-page decision
//! - `gesture` - Drag sample tracking
//! - `surface` - Host traits (`Anchor`, `ScrollSurface`)
//!
//! ## L3 Molecular Layer
//! - `tween` - Anchor position tween with delay and loop modes
//! - `view` - Snap scroll view combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use snapscroll_core::{SnapScrollView, Vec2, AppConfig};
//!
//! let config = AppConfig::default();
//! let mut view = SnapScrollView::from_app_config(Vec2::ZERO, &config);
//! view.on_page_changed(|event| println!("page {}", event.page));
//!
//! // Host input callbacks
//! view.on_gesture_begin(content_offset);
//! view.on_gesture_sample(content_offset);
//! view.on_gesture_end();
//!
//! // Once per frame
//! view.update(delta_seconds);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod gesture;
pub mod paging;
pub mod surface;
pub mod timing;

// L3 Molecular Layer
pub mod listeners;
pub mod tween;
pub mod view;

// Re-exports for convenient access
pub use easing::{evaluate, evaluate_tag, EasingFn};
pub use gesture::{DragSamples, DragTracker};
pub use listeners::{ListenerId, PageChanged, PageListeners};
pub use paging::{decide, Direction, DragRelease, PageDecision, PagingState, Trigger};
pub use surface::{Anchor, ScrollSurface};
pub use timing::{frame_interval, FrameClock};
pub use tween::{Tween, TweenState};
pub use view::SnapScrollView;
