use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Left margin between the container edge and the strip origin
const STRIP_MARGIN: u16 = 1;

pub struct CarouselWidget;

impl CarouselWidget {
    /// Render the visible window of the slide strip
    ///
    /// Each slide is drawn at its strip offset shifted left by the current
    /// scroll position; slides that straddle the container edge are clipped
    /// to their visible portion, the ones fully outside are skipped.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let background = Block::default().style(Style::default().bg(theme.bg));
        frame.render_widget(background, area);

        if area.width <= 2 * STRIP_MARGIN || area.height < 3 {
            return;
        }

        let scroll = app.slider.scroll();
        let current = app.slider.current_slide().ok();

        let slide_y = area.y + 1;
        let slide_height = area.height.saturating_sub(2);
        let left_edge = i32::from(area.x) + i32::from(STRIP_MARGIN);
        let right_edge = i32::from(area.right()) - i32::from(STRIP_MARGIN);
        let origin = left_edge - i32::from(scroll);

        for (index, extent) in app.slider.layout().extents().iter().enumerate() {
            let x0 = origin + i32::from(extent.offset);
            let x1 = x0 + i32::from(extent.width);
            if x1 <= left_edge || x0 >= right_edge {
                continue;
            }

            let clipped_x = x0.max(left_edge);
            let clipped_right = x1.min(right_edge);
            let slide_area = Rect::new(
                clipped_x as u16,
                slide_y,
                (clipped_right - clipped_x) as u16,
                slide_height,
            );

            Self::render_slide(frame, slide_area, app, index, Some(index) == current);
        }
    }

    fn render_slide(frame: &mut Frame, area: Rect, app: &App, index: usize, is_current: bool) {
        let theme = &app.theme;
        let slide = &app.deck.slides[index];

        let border_style = if is_current {
            Style::default().fg(theme.border_active)
        } else {
            Style::default().fg(theme.border)
        };

        let title_style = if is_current {
            Style::default().fg(theme.title)
        } else {
            Style::default().fg(theme.dim)
        };

        let mut block = Block::default()
            .title(Line::styled(format!(" {} ", slide.title), title_style))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.surface));

        if app.config.ui.show_slide_numbers {
            let number = format!(" {}/{} ", index + 1, app.deck.len());
            block = block.title_bottom(Line::styled(number, Style::default().fg(theme.dim)).right_aligned());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let body = Paragraph::new(slide.body.as_str())
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, inner);
    }
}
