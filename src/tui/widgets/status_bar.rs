use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::layout_constants::STATUS_BAR_HEIGHT;
use crate::tui::component::ElementWidget;

/// Two-line status bar: a separator, then the status message on the left
/// and a short summary on the right
#[derive(Clone, Debug, Default)]
pub struct StatusBarWidget {
    pub message: Option<String>,
    pub is_error: bool,
    pub summary: String,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let chars = &config.box_chars;

        let right_text = format!(" {} ", self.summary);
        let bar_position = area
            .width
            .saturating_sub(right_text.width() as u16 + 1) as usize;

        let separator = format!(
            "{}{}{}",
            chars.horizontal.repeat(bar_position),
            if config.use_unicode { "┬" } else { "+" },
            chars
                .horizontal
                .repeat((area.width as usize).saturating_sub(bar_position + 1))
        );

        let left_text = self.message.clone().unwrap_or_default();
        let left_style = if self.is_error {
            Style::default().fg(config.error_fg)
        } else {
            Style::default()
        };
        let left_width = bar_position.saturating_sub(1);
        let left = crate::formatting::truncate_to_width(&left_text, left_width);
        let padding = bar_position.saturating_sub(1 + left.width());

        let status_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(left, left_style),
            Span::raw(" ".repeat(padding)),
            Span::raw(chars.vertical.clone()),
            Span::raw(right_text),
        ]);

        Paragraph::new(vec![Line::raw(separator), status_line]).render(area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(STATUS_BAR_HEIGHT)
    }
}
