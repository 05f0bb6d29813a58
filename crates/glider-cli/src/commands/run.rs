use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use glider_core::{AppConfig, Deck};
use glider_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    load_theme,
    widgets::{CarouselWidget, ControlsWidget, HelpPopup, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, deck_path: Option<PathBuf>) -> Result<()> {
    let deck = match &deck_path {
        Some(path) => Deck::from_path(path)?,
        None => Deck::sample(),
    };
    info!(slides = deck.len(), "starting carousel");

    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Glider")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.animation.fps);
    let mut app = App::new(deck, config, theme);

    let result = event_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore the terminal before surfacing any error from the loop
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        // Advance the slide transition
        app.on_tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: carousel + controls + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(size);

            CarouselWidget::render(frame, main_layout[0], app);
            ControlsWidget::render(frame, main_layout[1], app);
            StatusBarWidget::render(frame, main_layout[2], app);

            if app.show_help {
                HelpPopup::render(frame, app);
            }
        })?;

        // Handle events (faster poll while a transition is in flight)
        let event = if app.slider.is_animating() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply_action(action)?;
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app);
                    app.apply_action(action)?;
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
