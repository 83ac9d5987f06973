use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::data_provider::{fetch_top_streams, StreamDataProvider};
use crate::formatting::{format_header, format_viewers, truncate_to_width};
use crate::layout_constants::{CLI_CHANNEL_COL_WIDTH, CLI_TITLE_COL_WIDTH, CLI_VIEWERS_COL_WIDTH};
use crate::twitch::Stream;

/// Pad to a display width; `format!` padding counts chars, not columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

pub fn format_streams(game: &str, streams: &[Stream], offset: u32, display: &DisplayConfig) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header(&format!("Live Streams - {}", game), true, display));
    output.push('\n');

    if streams.is_empty() {
        output.push_str("No live streams found.\n");
        return output;
    }

    output.push_str(&format!(
        "{:>3}  {}  {:>viewers$}  {}\n",
        "#",
        pad("Channel", CLI_CHANNEL_COL_WIDTH),
        "Viewers",
        "Title",
        viewers = CLI_VIEWERS_COL_WIDTH,
    ));
    output.push_str(&format!(
        "{}\n",
        display
            .box_chars
            .horizontal
            .repeat(3 + 2 + CLI_CHANNEL_COL_WIDTH + 2 + CLI_VIEWERS_COL_WIDTH + 2 + CLI_TITLE_COL_WIDTH)
    ));

    for (i, stream) in streams.iter().enumerate() {
        let rank = offset as usize + i + 1;
        let channel = truncate_to_width(stream.display_name(), CLI_CHANNEL_COL_WIDTH);
        let title = truncate_to_width(stream.title.trim(), CLI_TITLE_COL_WIDTH);
        output.push_str(&format!(
            "{:>3}  {}  {:>viewers$}  {}\n",
            rank,
            pad(&channel, CLI_CHANNEL_COL_WIDTH),
            format_viewers(stream.viewer_count),
            title,
            viewers = CLI_VIEWERS_COL_WIDTH,
        ));
    }
    output
}

pub async fn run(
    provider: &dyn StreamDataProvider,
    game: &str,
    offset: u32,
    limit: u32,
    display: &DisplayConfig,
) -> Result<()> {
    let streams = fetch_top_streams(provider, game, offset, limit)
        .await
        .with_context(|| format!("Failed to fetch live streams for '{}'", game))?;

    print!("{}", format_streams(game, &streams, offset, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_stream, create_mock_streams};

    #[test]
    fn test_format_streams_header_and_rows() {
        let display = DisplayConfig::default();
        let streams = create_mock_streams("1", 2);

        let output = format_streams("Dota 2", &streams, 0, &display);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "Live Streams - Dota 2");
        assert_eq!(lines[2], "═".repeat("Live Streams - Dota 2".len()));
        assert!(lines[4].starts_with("  #  Channel"));
        assert!(lines[6].starts_with("  1  NightOwlPlays0"));
        assert!(lines[6].contains("50K"));
        assert!(lines[7].starts_with("  2  PixelPaladin1"));
        assert!(lines[7].contains("48K"));
    }

    #[test]
    fn test_format_streams_ranks_start_after_offset() {
        let display = DisplayConfig::default();
        let streams = vec![create_mock_stream("1", 5)];

        let output = format_streams("Dota 2", &streams, 20, &display);

        assert!(output.contains(" 21  FragMaster5"));
    }

    #[test]
    fn test_format_streams_empty() {
        let output = format_streams("Dota 2", &[], 0, &DisplayConfig::default());
        assert!(output.contains("No live streams found."));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let display = DisplayConfig::default();
        let mut stream = create_mock_stream("1", 0);
        stream.title = "x".repeat(200);

        let output = format_streams("Dota 2", &[stream], 0, &display);
        let row = output.lines().nth(6).unwrap_or_default();

        assert!(row.ends_with('…'));
        assert!(row.width() <= 3 + 2 + CLI_CHANNEL_COL_WIDTH + 2 + CLI_VIEWERS_COL_WIDTH + 2 + CLI_TITLE_COL_WIDTH);
    }
}
