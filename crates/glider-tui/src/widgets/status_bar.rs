use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let deck_title = app.deck.title.as_deref().unwrap_or("deck");
        let mut position = match app.slider.current_slide() {
            Ok(index) if app.config.ui.show_slide_numbers => {
                format!("Slide {}/{}", index + 1, app.deck.len())
            }
            _ => String::new(),
        };
        if app.slider.is_animating() && !position.is_empty() {
            position.push_str(" »");
        }

        let status_text = if position.is_empty() {
            format!(" {}", deck_title)
        } else {
            format!(" {} | {}", deck_title, position)
        };

        let help_hint = " h/l:slides g/G:ends ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(
                UnicodeWidthStr::width(status_text.as_str()) as u16
                    + UnicodeWidthStr::width(help_hint) as u16,
            ) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.text).bg(theme.surface),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.surface)),
            Span::styled(help_hint, Style::default().fg(theme.dim).bg(theme.surface)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
