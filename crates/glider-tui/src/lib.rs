pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod slider;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use slider::Slider;
pub use theme::{load_theme, Theme};
