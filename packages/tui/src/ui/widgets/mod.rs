pub mod status_bar;
pub mod toasts;

pub use status_bar::StatusBarWidget;
pub use toasts::ToastsWidget;
