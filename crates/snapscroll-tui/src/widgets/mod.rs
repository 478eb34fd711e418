mod indicators;
mod pages;
mod status_bar;

pub use indicators::IndicatorWidget;
pub use pages::PagesWidget;
pub use status_bar::StatusBarWidget;
