//! Widgets for the stream grid screen
//!
//! Widgets are small, focused renderers that draw straight into a ratatui
//! Buffer. Components compose them into an Element tree.

#[cfg(test)]
pub mod testing;

pub mod grid_view;
pub use grid_view::GridViewWidget;

pub mod message_overlay;
pub use message_overlay::{MessageKind, MessageOverlayWidget};

pub mod playback_panel;
pub use playback_panel::PlaybackPanelWidget;

pub mod status_bar;
pub use status_bar::StatusBarWidget;

pub mod stream_tile;
pub use stream_tile::StreamTileWidget;

pub mod title_bar;
pub use title_bar::TitleBarWidget;

use ratatui::{
    symbols::border,
    widgets::{Block, BorderType, Borders},
};

use crate::config::DisplayConfig;

/// Border set used when unicode is disabled
pub const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Block with all borders, rounded in unicode mode and plain ASCII otherwise
pub fn bordered_block(config: &DisplayConfig) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if config.use_unicode {
        block.border_type(BorderType::Rounded)
    } else {
        block.border_set(ASCII_BORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
    use testing::{buffer_line, test_config, test_config_ascii};

    fn render_block(config: &DisplayConfig) -> Buffer {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        bordered_block(config).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_bordered_block_unicode() {
        let buf = render_block(&test_config());
        assert_eq!(buffer_line(&buf, 0), "╭──╮");
        assert_eq!(buffer_line(&buf, 1), "│  │");
        assert_eq!(buffer_line(&buf, 2), "╰──╯");
    }

    #[test]
    fn test_bordered_block_ascii() {
        let buf = render_block(&test_config_ascii());
        assert_eq!(buffer_line(&buf, 0), "+--+");
        assert_eq!(buffer_line(&buf, 1), "|  |");
        assert_eq!(buffer_line(&buf, 2), "+--+");
    }
}
