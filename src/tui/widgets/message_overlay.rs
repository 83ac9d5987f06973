use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

use super::bordered_block;

/// Text shown by the loading indicator
pub const LOADING_MESSAGE: &str = "Loading live streams...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Error,
}

/// Centered framed message over the screen: the loading indicator or the error view
#[derive(Clone, Debug)]
pub struct MessageOverlayWidget {
    pub kind: MessageKind,
    pub message: String,
}

impl MessageOverlayWidget {
    pub fn loading() -> Self {
        Self {
            kind: MessageKind::Loading,
            message: LOADING_MESSAGE.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            message: message.into(),
        }
    }

    /// Centered box sized to the message plus one cell of padding
    fn frame(&self, area: Rect) -> Rect {
        let lines: Vec<&str> = self.message.lines().collect();
        let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let width = (text_width + 4).min(area.width);
        let height = (lines.len() as u16 + 2).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl ElementWidget for MessageOverlayWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let frame = self.frame(area);
        let style = match self.kind {
            MessageKind::Loading => Style::default().add_modifier(Modifier::ITALIC),
            MessageKind::Error => Style::default()
                .fg(config.error_fg)
                .add_modifier(Modifier::BOLD),
        };

        Clear.render(frame, buf);
        let block = bordered_block(config).border_style(style);
        let inner = block.inner(frame);
        block.render(frame, buf);

        for (i, line) in self.message.lines().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let x = inner.x + inner.width.saturating_sub(line.width() as u16) / 2;
            buf.set_stringn(x, y, line, inner.width as usize, style);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
