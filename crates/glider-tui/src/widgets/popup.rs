use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpPopup;

impl HelpPopup {
    /// Render the key binding overlay
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.config.keymap;
        let area = frame.area();

        let rows: Vec<(&str, &str)> = vec![
            (keymap.next.as_str(), "next slide"),
            (keymap.previous.as_str(), "previous slide"),
            (keymap.first.as_str(), "first slide"),
            (keymap.last.as_str(), "last slide"),
            (keymap.help.as_str(), "toggle this help"),
            (keymap.quit.as_str(), "quit"),
        ];

        let popup_width = 36u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines: Vec<Line> = rows
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>7} ", key),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(what.to_string(), Style::default().fg(theme.text)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(36, 8, area);
        assert_eq!(rect, Rect::new(32, 16, 36, 8));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(36, 8, area);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
    }
}
