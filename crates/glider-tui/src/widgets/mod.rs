mod carousel;
mod controls;
mod popup;
mod status_bar;

pub use carousel::CarouselWidget;
pub use controls::ControlsWidget;
pub use popup::HelpPopup;
pub use status_bar::StatusBarWidget;
