use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const PREV_LABEL: &str = " ‹ Prev ";
const NEXT_LABEL: &str = " Next › ";
/// Columns between the two buttons
const BUTTON_GAP: u16 = 4;

pub struct ControlsWidget;

impl ControlsWidget {
    /// Render the prev/next buttons and record their click zones
    ///
    /// A button at its end of the strip is drawn dimmed; its zone is still
    /// recorded (a click there is a no-op in the slider, same as the key).
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;

        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(theme.bg)),
            area,
        );

        let prev_width = UnicodeWidthStr::width(PREV_LABEL) as u16;
        let next_width = UnicodeWidthStr::width(NEXT_LABEL) as u16;
        let total = prev_width + BUTTON_GAP + next_width;
        if area.width < total || area.height == 0 {
            app.button_zones.previous = None;
            app.button_zones.next = None;
            return;
        }

        let start_x = area.x + (area.width - total) / 2;
        let prev_area = Rect::new(start_x, area.y, prev_width, 1);
        let next_area = Rect::new(start_x + prev_width + BUTTON_GAP, area.y, next_width, 1);

        let current = app.slider.current_slide().ok();
        let at_first = current == Some(0);
        let at_last = match app.slider.layout().last_index() {
            Some(last) => current == Some(last),
            None => true,
        };

        Self::render_button(frame, prev_area, PREV_LABEL, at_first, theme);
        Self::render_button(frame, next_area, NEXT_LABEL, at_last, theme);

        app.button_zones.previous = Some(prev_area);
        app.button_zones.next = Some(next_area);
    }

    fn render_button(
        frame: &mut Frame,
        area: Rect,
        label: &str,
        disabled: bool,
        theme: &crate::theme::Theme,
    ) {
        let style = if disabled {
            Style::default().fg(theme.button_disabled).bg(theme.surface)
        } else {
            Style::default()
                .fg(theme.button)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), area);
    }
}
