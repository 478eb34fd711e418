pub mod config;
pub mod error;
pub mod geometry;
pub mod replay;
pub mod snap;

pub use config::{AppConfig, EasingCurve, LoopMode, SnapConfig, TweenSettings};
pub use error::{Error, Result};
pub use geometry::Vec2;
pub use snap::{SnapScrollView, Tween};
