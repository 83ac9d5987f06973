use super::grid::{Direction, GridPosition};
use crate::twitch::Stream;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (async data loading, player launch)
/// - The render loop (viewport size)
#[derive(Debug, Clone)]
pub enum Action {
    /// The stream screen became visible: start a new load
    Activate,

    /// Completion of a stream fetch, tagged with the generation that requested it
    StreamsLoaded {
        generation: u64,
        result: Result<Vec<Stream>, String>,
    },

    // Grid navigation
    MoveFocus(Direction),
    SelectFocused,
    SelectItem(GridPosition),

    // Playback panel
    ClosePlayback,
    LaunchPlayer,
    PlayerLaunched(Result<String, String>),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
    UpdateViewport { width: u16, height: u16 },
}
