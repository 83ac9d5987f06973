use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, warn};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::{AppState, GridView, LoadPhase, TitleBarView, FETCH_ERROR_MESSAGE};
use crate::twitch::Stream;

/// Handle activation and fetch completions
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Activate => Ok(handle_activate(state)),
        Action::StreamsLoaded { generation, result } => {
            Ok(handle_streams_loaded(state, *generation, result.clone()))
        }
        _ => Err(state),
    }
}

fn handle_activate(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    let screen = &mut new_state.screen;

    screen.generation += 1;
    screen.phase = LoadPhase::Loading;
    debug!(
        "DATA: Activating '{}' (generation {})",
        screen.game, screen.generation
    );

    let effect = Effect::FetchStreams {
        game: screen.game.clone(),
        offset: screen.offset,
        limit: screen.limit,
        generation: screen.generation,
    };
    (new_state, effect)
}

fn handle_streams_loaded(
    state: AppState,
    generation: u64,
    result: Result<Vec<Stream>, String>,
) -> (AppState, Effect) {
    if generation != state.screen.generation {
        debug!(
            "DATA: Dropping stale stream list (generation {}, current {})",
            generation, state.screen.generation
        );
        return (state, Effect::None);
    }

    let mut new_state = state;
    match result {
        Ok(streams) if !streams.is_empty() => {
            debug!("DATA: Loaded {} streams", streams.len());
            new_state.screen.streams = Arc::new(Some(streams));
            new_state.system.last_refresh = Some(SystemTime::now());
            present_content(&mut new_state);
        }
        Ok(_) => {
            warn!("No live streams returned for '{}'", new_state.screen.game);
            new_state.screen.phase = LoadPhase::Error(FETCH_ERROR_MESSAGE.to_string());
        }
        Err(e) => {
            warn!("Failed to load streams for '{}': {}", new_state.screen.game, e);
            new_state.screen.phase = LoadPhase::Error(FETCH_ERROR_MESSAGE.to_string());
        }
    }

    (new_state, Effect::None)
}

/// Mount the title bar and grid once; later loads only reload the grid
fn present_content(state: &mut AppState) {
    let title = state.screen.title();
    if state
        .screen
        .title_bar
        .ensure_mounted(|| TitleBarView { title })
    {
        debug!("DATA: Mounted title bar");
    }

    let count = state.screen.streams().len();
    let metrics = *state.screen.grid().metrics();
    if !state.screen.grid.ensure_mounted(GridView::default) {
        if let Some(grid) = state.screen.grid.get_mut() {
            grid.reloads += 1;
            grid.focus = metrics.clamp(count, grid.focus);
            grid.scroll_section = grid.scroll_section.min(grid.focus.section);
            debug!("DATA: Reloaded grid ({} reloads)", grid.reloads);
        }
    }

    state.screen.phase = LoadPhase::Content;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_streams;
    use crate::tui::grid::GridPosition;

    fn loaded(state: AppState, count: usize) -> AppState {
        let generation = state.screen.generation;
        let action = Action::StreamsLoaded {
            generation,
            result: Ok(create_mock_streams("1", count)),
        };
        reduce_data_loading(state, &action).unwrap().0
    }

    fn activated(state: AppState) -> AppState {
        reduce_data_loading(state, &Action::Activate).unwrap().0
    }

    #[test]
    fn test_activate_starts_loading_and_fetches() {
        let (state, effect) = reduce_data_loading(AppState::default(), &Action::Activate).unwrap();

        assert!(state.screen.is_loading());
        assert_eq!(state.screen.generation, 1);
        match effect {
            Effect::FetchStreams {
                offset,
                limit,
                generation,
                ..
            } => {
                assert_eq!(offset, 0);
                assert_eq!(limit, 20);
                assert_eq!(generation, 1);
            }
            other => panic!("expected FetchStreams, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_error_leaves_grid_unmounted() {
        let state = activated(AppState::default());
        let action = Action::StreamsLoaded {
            generation: 1,
            result: Err("connection refused".to_string()),
        };
        let (state, _) = reduce_data_loading(state, &action).unwrap();

        assert!(!state.screen.is_loading());
        assert_eq!(state.screen.error_message(), Some(FETCH_ERROR_MESSAGE));
        assert!(!state.screen.grid.is_mounted());
        assert!(!state.screen.title_bar.is_mounted());
        assert!(state.screen.streams.is_none());
    }

    #[test]
    fn test_empty_result_is_an_error() {
        let state = activated(AppState::default());
        let state = loaded(state, 0);

        assert_eq!(state.screen.error_message(), Some(FETCH_ERROR_MESSAGE));
        assert!(!state.screen.grid.is_mounted());
    }

    #[test]
    fn test_success_mounts_title_bar_and_grid() {
        let state = activated(AppState::default());
        let state = loaded(state, 20);

        assert_eq!(state.screen.phase, LoadPhase::Content);
        assert_eq!(
            state.screen.title_bar.get().map(|t| t.title.as_str()),
            Some("Live Streams - Just Chatting")
        );
        assert_eq!(state.screen.grid.get().map(|g| g.reloads), Some(0));
        assert_eq!(state.screen.streams().len(), 20);
        assert!(state.system.last_refresh.is_some());
    }

    #[test]
    fn test_second_success_reloads_without_remounting() {
        let state = loaded(activated(AppState::default()), 20);
        let mut state = activated(state);
        if let Some(title_bar) = state.screen.title_bar.get_mut() {
            title_bar.title = "kept".to_string();
        }
        let state = loaded(state, 12);

        assert_eq!(
            state.screen.title_bar.get().map(|t| t.title.as_str()),
            Some("kept")
        );
        assert_eq!(state.screen.grid.get().map(|g| g.reloads), Some(1));
        assert_eq!(state.screen.streams().len(), 12);
    }

    #[test]
    fn test_reload_clamps_focus_to_shorter_list() {
        let mut state = loaded(activated(AppState::default()), 20);
        if let Some(grid) = state.screen.grid.get_mut() {
            grid.focus = GridPosition::new(6, 1);
            grid.scroll_section = 5;
        }
        let state = loaded(activated(state), 4);

        let grid = state.screen.grid.get().unwrap();
        assert_eq!(grid.focus, GridPosition::new(1, 0));
        assert_eq!(grid.scroll_section, 1);
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let state = activated(AppState::default());
        let state = activated(state);
        assert_eq!(state.screen.generation, 2);

        let stale = Action::StreamsLoaded {
            generation: 1,
            result: Ok(create_mock_streams("1", 20)),
        };
        let (state, _) = reduce_data_loading(state, &stale).unwrap();

        assert!(state.screen.is_loading());
        assert!(state.screen.streams.is_none());
        assert!(!state.screen.grid.is_mounted());
    }

    #[test]
    fn test_error_after_content_keeps_grid_mounted() {
        let state = loaded(activated(AppState::default()), 20);
        let state = activated(state);
        let action = Action::StreamsLoaded {
            generation: state.screen.generation,
            result: Err("timeout".to_string()),
        };
        let (state, _) = reduce_data_loading(state, &action).unwrap();

        assert!(state.screen.error_message().is_some());
        assert_eq!(state.screen.grid.get().map(|g| g.reloads), Some(0));
        assert_eq!(state.screen.streams().len(), 20);
    }

    #[test]
    fn test_unrelated_action_passes_through() {
        assert!(reduce_data_loading(AppState::default(), &Action::Quit).is_err());
    }
}
