/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use crate::tui::component::ElementWidget;

/// Create a test DisplayConfig with unicode box characters
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(145, 70, 255),
        unfocused_selection_fg: None,
        title_bar_bg: Color::Rgb(128, 128, 128),
        error_fg: Color::Red,
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
///
/// Useful for tests that want predictable ASCII-only output.
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl ElementWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl ElementWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width).map(|x| buf[(x, line)].symbol()).collect()
}

/// Whether any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    (0..buf.area().height).any(|y| buffer_line(buf, y).contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    /// Simple test widget for testing the testing utilities
    #[derive(Clone)]
    struct TestWidget {
        text: String,
    }

    impl ElementWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 2);

        assert_eq!(buffer_line(&buf, 0), "Hello     ");
        assert!(buffer_contains(&buf, "llo"));
        assert!(!buffer_contains(&buf, "World"));
    }

    #[test]
    fn test_ascii_config_uses_ascii_box_chars() {
        let config = test_config_ascii();
        assert!(!config.use_unicode);
        assert_eq!(config.box_chars, BoxChars::ascii());
    }
}
