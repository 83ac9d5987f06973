use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::formatting::{format_uptime, format_viewers, truncate_to_width};
use crate::layout_constants::{PLAYBACK_PANEL_HEIGHT, PLAYBACK_PANEL_WIDTH};
use crate::tui::component::ElementWidget;
use crate::twitch::Stream;

use super::bordered_block;

/// Width of the label column inside the panel
const LABEL_WIDTH: usize = 10;

/// Modal panel with the details of the selected stream
#[derive(Clone, Debug)]
pub struct PlaybackPanelWidget {
    pub stream: Stream,
    pub player_command: String,
    pub now: DateTime<Utc>,
}

impl PlaybackPanelWidget {
    fn rows(&self, text_width: usize) -> Vec<(&'static str, String)> {
        let uptime = self
            .stream
            .uptime(self.now)
            .map(format_uptime)
            .unwrap_or_else(|| "-".to_string());
        let value_width = text_width.saturating_sub(LABEL_WIDTH);

        vec![
            ("Title", truncate_to_width(&self.stream.title, value_width)),
            ("Channel", self.stream.user_login.clone()),
            ("Game", self.stream.game_name.clone()),
            ("Viewers", format_viewers(self.stream.viewer_count)),
            ("Uptime", uptime),
            ("Language", self.stream.language.to_uppercase()),
            ("URL", truncate_to_width(&self.stream.channel_url(), value_width)),
        ]
    }
}

impl ElementWidget for PlaybackPanelWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = PLAYBACK_PANEL_WIDTH.min(area.width);
        let height = PLAYBACK_PANEL_HEIGHT.min(area.height);
        if width < 4 || height < 3 {
            return;
        }
        let panel = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        Clear.render(panel, buf);
        let accent = Style::default().fg(config.selection_fg);
        let block = bordered_block(config)
            .border_style(accent)
            .title(format!(" {} ", self.stream.display_name()))
            .title_style(accent.add_modifier(Modifier::BOLD));
        let inner = block.inner(panel);
        block.render(panel, buf);

        let mut lines: Vec<Line> = self
            .rows(inner.width.saturating_sub(2) as usize)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}", label, width = LABEL_WIDTH - 1),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::raw(value),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(format!(" Enter: play in {}", self.player_command), accent),
            Span::raw("   ESC: back"),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(PLAYBACK_PANEL_HEIGHT)
    }
}
