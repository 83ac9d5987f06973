//! Shared layout constants used across CLI and TUI components.
//!
//! The grid is specified in two unit systems. The `TV_*` values are the
//! point-based metrics of a 1920-wide television layout; the `CELL_*`
//! values are the same layout scaled to terminal cells.

/// Fixed number of tiles per grid row
pub const NUM_COLUMNS: usize = 3;

/// Number of streams requested per activation
pub const STREAM_FETCH_LIMIT: u32 = 20;

/// Offset of the first requested stream
pub const STREAM_FETCH_OFFSET: u32 = 0;

/// Helix never returns more than this many entries per page
pub const HELIX_MAX_PAGE_SIZE: u32 = 100;

/// Width / height of a stream preview image, sampled from Twitch thumbnails
pub const PREVIEW_IMG_ASPECT_RATIO: f64 = 1.777777777;

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_HEIGHT_TO_WIDTH: f64 = 2.0;

// TV (point) metrics

pub const TV_ITEMS_INSETS_X: f64 = 45.0;
pub const TV_ITEMS_INSETS_Y: f64 = 30.0;
pub const TV_TOP_BAR_HEIGHT: f64 = 100.0;
/// Height of the caption rendered above and below the preview
pub const TV_LABEL_HEIGHT: f64 = 50.0;
pub const TV_ITEM_SPACING: f64 = 10.0;

// Terminal (cell) metrics

pub const CELL_ITEMS_INSETS_X: f64 = 1.0;
pub const CELL_ITEMS_INSETS_Y: f64 = 1.0;
pub const CELL_TOP_BAR_HEIGHT: f64 = 3.0;
pub const CELL_LABEL_HEIGHT: f64 = 1.0;
pub const CELL_ITEM_SPACING: f64 = 1.0;

/// Height of the status bar (separator + message line)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Width of the centered playback panel
pub const PLAYBACK_PANEL_WIDTH: u16 = 64;

/// Height of the centered playback panel
pub const PLAYBACK_PANEL_HEIGHT: u16 = 12;

// CLI-specific formatting constants

/// Width of the channel column in `streamgrid streams`
pub const CLI_CHANNEL_COL_WIDTH: usize = 20;

/// Width of the viewers column in `streamgrid streams`
pub const CLI_VIEWERS_COL_WIDTH: usize = 8;

/// Width of the title column in `streamgrid streams`
pub const CLI_TITLE_COL_WIDTH: usize = 60;
