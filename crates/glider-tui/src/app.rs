use std::sync::Arc;

use glider_core::{AppConfig, Deck, Result};
use ratatui::layout::Rect;

use crate::input::Action;
use crate::slider::Slider;
use crate::theme::Theme;

/// Screen rects of the prev/next buttons, recorded during render so mouse
/// clicks can be hit-tested against what is actually on screen
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonZones {
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub deck: Deck,
    pub slider: Slider,
    pub show_help: bool,
    pub button_zones: ButtonZones,
    pub should_quit: bool,
}

impl App {
    pub fn new(deck: Deck, config: Arc<AppConfig>, theme: Theme) -> Self {
        let slider = Slider::new(&deck, &config);
        Self {
            config,
            theme,
            deck,
            slider,
            show_help: false,
            button_zones: ButtonZones::default(),
            should_quit: false,
        }
    }

    /// Apply an input action
    ///
    /// Navigation resolves the current slide from geometry; a broken
    /// geometry invariant surfaces here as `NoCurrentSlide` and is passed
    /// straight up to the caller.
    pub fn apply_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextSlide => self.slider.next()?,
            Action::PreviousSlide => self.slider.previous()?,
            Action::FirstSlide => self.slider.jump_to(0),
            Action::LastSlide => {
                if let Some(last) = self.slider.layout().last_index() {
                    self.slider.jump_to(last);
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::None => {}
        }
        Ok(())
    }

    /// Advance the slide transition; call once per tick
    pub fn on_tick(&mut self) {
        self.slider.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut config = AppConfig::default();
        config.animation.enabled = false;
        App::new(Deck::sample(), Arc::new(config), Theme::default())
    }

    #[test]
    fn test_quit_action() {
        let mut app = test_app();
        app.apply_action(Action::Quit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = test_app();
        app.apply_action(Action::NextSlide).unwrap();
        assert_eq!(app.slider.current_slide().unwrap(), 1);
        app.apply_action(Action::PreviousSlide).unwrap();
        assert_eq!(app.slider.current_slide().unwrap(), 0);
        app.apply_action(Action::LastSlide).unwrap();
        assert_eq!(app.slider.current_slide().unwrap(), app.deck.len() - 1);
        app.apply_action(Action::FirstSlide).unwrap();
        assert_eq!(app.slider.current_slide().unwrap(), 0);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = test_app();
        app.apply_action(Action::ToggleHelp).unwrap();
        assert!(app.show_help);
        app.apply_action(Action::ToggleHelp).unwrap();
        assert!(!app.show_help);
    }
}
