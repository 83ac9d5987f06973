use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::truncate_to_width;
use crate::layout_constants::CELL_TOP_BAR_HEIGHT;
use crate::tui::component::ElementWidget;

/// Solid bar across the top of the screen with a centered title
#[derive(Clone, Debug)]
pub struct TitleBarWidget {
    pub title: String,
}

impl TitleBarWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl ElementWidget for TitleBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bar_style = Style::default().bg(config.title_bar_bg);
        buf.set_style(area, bar_style);

        let title = truncate_to_width(&self.title, area.width.saturating_sub(2) as usize);
        let x = area.x + area.width.saturating_sub(title.width() as u16) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, &title, bar_style.add_modifier(Modifier::BOLD));
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(CELL_TOP_BAR_HEIGHT as u16)
    }
}
