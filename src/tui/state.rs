use std::sync::Arc;
use std::time::SystemTime;

use crate::config::{Config, DEFAULT_GAME};
use crate::layout_constants::{STATUS_BAR_HEIGHT, STREAM_FETCH_LIMIT, STREAM_FETCH_OFFSET};
use crate::twitch::Stream;

use super::grid::{GridMetrics, GridPosition, StreamGrid};

/// Shown whenever a stream list fetch fails or comes back empty
pub const FETCH_ERROR_MESSAGE: &str =
    "Error loading streams list.\nPlease check your internet connection.";

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→↑↓ move | Enter open | r reload | ESC close | q quit";

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The stream grid screen
    pub screen: ScreenState,

    /// Modal navigation on top of the screen
    pub navigation: NavigationState,

    /// System state
    pub system: SystemState,
}

/// Load state machine of the screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Content,
    Error(String),
}

/// A view that is created once and then kept alive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount<T> {
    Unmounted,
    Mounted(T),
}

impl<T> Default for Mount<T> {
    fn default() -> Self {
        Mount::Unmounted
    }
}

impl<T> Mount<T> {
    /// Mount with `create` unless already mounted; returns true if it was created now
    pub fn ensure_mounted(&mut self, create: impl FnOnce() -> T) -> bool {
        match self {
            Mount::Mounted(_) => false,
            Mount::Unmounted => {
                *self = Mount::Mounted(create());
                true
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, Mount::Mounted(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Mount::Mounted(view) => Some(view),
            Mount::Unmounted => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Mount::Mounted(view) => Some(view),
            Mount::Unmounted => None,
        }
    }
}

/// Title bar above the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarView {
    pub title: String,
}

/// Mounted grid: focus, scroll and how many times its data was reloaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridView {
    pub reloads: u32,
    pub focus: GridPosition,
    pub scroll_section: usize,
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    pub game: String,
    pub offset: u32,
    pub limit: u32,
    pub phase: LoadPhase,

    /// Bumped on every activation; completions with an older value are dropped
    pub generation: u64,

    /// Absent until the first successful fetch
    pub streams: Arc<Option<Vec<Stream>>>,

    pub title_bar: Mount<TitleBarView>,
    pub grid: Mount<GridView>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            game: DEFAULT_GAME.to_string(),
            offset: STREAM_FETCH_OFFSET,
            limit: STREAM_FETCH_LIMIT,
            phase: LoadPhase::Idle,
            generation: 0,
            streams: Arc::new(None),
            title_bar: Mount::Unmounted,
            grid: Mount::Unmounted,
        }
    }
}

impl ScreenState {
    /// Screen for one game, fetching `limit` streams from offset 0
    pub fn for_game(game: impl Into<String>, limit: u32) -> Self {
        Self {
            game: game.into(),
            limit,
            ..Self::default()
        }
    }

    pub fn title(&self) -> String {
        format!("Live Streams - {}", self.game)
    }

    pub fn streams(&self) -> &[Stream] {
        self.streams.as_ref().as_deref().unwrap_or(&[])
    }

    pub fn grid(&self) -> StreamGrid<'_> {
        StreamGrid::new(self.streams(), GridMetrics::terminal())
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Stream shown in the playback panel, if open
    pub playback: Option<Stream>,
}

/// Terminal size as last seen by the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl Viewport {
    /// Rows left for the grid below the status bar
    pub fn grid_height(&self) -> u16 {
        self.height.saturating_sub(STATUS_BAR_HEIGHT)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub last_refresh: Option<SystemTime>,
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub viewport: Viewport,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
