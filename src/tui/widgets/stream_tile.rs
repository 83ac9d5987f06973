/// StreamTile widget - one stream in the grid
///
/// The tile is a bordered preview area with two caption rows below it:
///
/// ```text
/// ╭──────────────────────╮
/// │● LIVE                │
/// │42K viewers        EN │
/// ╰──────────────────────╯
/// Ranked grind until dia…
/// PixelPaladin1
/// ```
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::{format_viewers, truncate_to_width};
use crate::layout_constants::CELL_LABEL_HEIGHT;
use crate::tui::component::ElementWidget;
use crate::twitch::Stream;

use super::bordered_block;

/// Rows taken by the two caption labels
const CAPTION_ROWS: u16 = 2 * CELL_LABEL_HEIGHT as u16;

#[derive(Clone, Debug)]
pub struct StreamTileWidget {
    pub stream: Stream,
    pub focused: bool,
    /// Focus is drawn dimmed while a modal owns the keyboard
    pub dimmed: bool,
}

impl StreamTileWidget {
    pub fn new(stream: Stream, focused: bool) -> Self {
        Self {
            stream,
            focused,
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    fn accent(&self, config: &DisplayConfig) -> Style {
        if !self.focused {
            Style::default()
        } else if self.dimmed {
            Style::default().fg(config.unfocused_selection_fg())
        } else {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::BOLD)
        }
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let block = bordered_block(config).border_style(self.accent(config));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let live = format!("{} LIVE", config.box_chars.live_dot);
        buf.set_string(
            inner.x,
            inner.y,
            truncate_to_width(&live, inner.width as usize),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );

        if inner.height < 2 {
            return;
        }
        let y = inner.y + inner.height - 1;
        let viewers = format!("{} viewers", format_viewers(self.stream.viewer_count));
        buf.set_string(
            inner.x,
            y,
            truncate_to_width(&viewers, inner.width as usize),
            Style::default(),
        );

        let language = self.stream.language.to_uppercase();
        let needed = viewers.width() + 1 + language.width();
        if !language.is_empty() && needed <= inner.width as usize {
            let x = inner.x + inner.width - language.width() as u16;
            buf.set_string(x, y, &language, Style::default().add_modifier(Modifier::DIM));
        }
    }
}

impl ElementWidget for StreamTileWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let preview_height = area.height.saturating_sub(CAPTION_ROWS);
        if preview_height > 0 {
            let preview = Rect::new(area.x, area.y, area.width, preview_height);
            self.render_preview(preview, buf, config);
        }

        let width = area.width as usize;
        let title_y = area.y + preview_height;
        if title_y < area.bottom() {
            buf.set_string(
                area.x,
                title_y,
                truncate_to_width(&self.stream.title, width),
                self.accent(config),
            );
        }

        let name_y = title_y + 1;
        if name_y < area.bottom() {
            buf.set_string(
                area.x,
                name_y,
                truncate_to_width(self.stream.display_name(), width),
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
