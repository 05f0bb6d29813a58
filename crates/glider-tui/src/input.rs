use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
    ToggleHelp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key dismisses the help overlay
    if app.show_help {
        return Action::ToggleHelp;
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Terminals disagree on whether shifted punctuation ('?' and friends)
    // carries the SHIFT modifier; retry the lookup without it
    if key.modifiers == KeyModifiers::SHIFT {
        if let KeyCode::Char(c) = key.code {
            return keymap
                .get(&KeyBinding::simple(KeyCode::Char(c)))
                .copied()
                .unwrap_or(Action::None);
        }
    }

    Action::None
}

/// Handle a mouse event, hit-testing the button zones recorded at render time
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.show_help {
                return Action::ToggleHelp;
            }
            if hit(app.button_zones.previous, mouse.column, mouse.row) {
                Action::PreviousSlide
            } else if hit(app.button_zones.next, mouse.column, mouse.row) {
                Action::NextSlide
            } else {
                Action::None
            }
        }
        _ => Action::None,
    }
}

fn hit(zone: Option<Rect>, x: u16, y: u16) -> bool {
    zone.is_some_and(|rect| {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    })
}
