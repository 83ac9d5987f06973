use tracing::debug;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::error::TuiError;
use crate::tui::grid::{Direction, GridPosition, SelectionHandler};
use crate::tui::state::AppState;

/// Handle grid focus, selection and the playback panel
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::MoveFocus(direction) => Ok((move_focus(state, *direction), Effect::None)),
        Action::SelectFocused => {
            let focus = state.screen.grid.get().map(|g| g.focus);
            match focus {
                Some(position) => Ok(select_item(state, position)),
                None => Ok((state, Effect::None)),
            }
        }
        Action::SelectItem(position) => Ok(select_item(state, *position)),
        Action::ClosePlayback => Ok(close_playback(state)),
        Action::LaunchPlayer => Ok(launch_player(state)),
        Action::PlayerLaunched(result) => {
            let mut new_state = state;
            match result {
                Ok(message) => new_state.system.set_status_message(message.clone()),
                Err(e) => new_state.system.set_status_error_message(e.clone()),
            }
            Ok((new_state, Effect::None))
        }
        Action::UpdateViewport { width, height } => {
            let mut new_state = state;
            new_state.system.viewport.width = *width;
            new_state.system.viewport.height = *height;
            reveal_focus(&mut new_state);
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

fn move_focus(state: AppState, direction: Direction) -> AppState {
    if state.navigation.playback.is_some() {
        return state;
    }

    let mut new_state = state;
    let count = new_state.screen.streams().len();
    let metrics = *new_state.screen.grid().metrics();
    if let Some(grid) = new_state.screen.grid.get_mut() {
        grid.focus = metrics.move_focus(count, grid.focus, direction);
        debug!("NAV: Focus moved {:?} to {:?}", direction, grid.focus);
    }
    reveal_focus(&mut new_state);
    new_state
}

/// Scroll just enough to keep the focused section fully visible
fn reveal_focus(state: &mut AppState) {
    let metrics = *state.screen.grid().metrics();
    let viewport = state.system.viewport;
    let (_, tile_height) = metrics.tile_cells(viewport.width);
    if let Some(grid) = state.screen.grid.get_mut() {
        grid.scroll_section = metrics.scroll_to_reveal(
            grid.focus.section,
            grid.scroll_section,
            tile_height as f64,
            viewport.grid_height() as f64,
        );
    }
}

fn select_item(state: AppState, position: GridPosition) -> (AppState, Effect) {
    if state.navigation.playback.is_some() || !state.screen.grid.is_mounted() {
        return (state, Effect::None);
    }

    let selection = state.screen.grid().select(position);
    let mut new_state = state;
    match selection {
        Some(stream) => {
            debug!(
                "NAV: Opening playback for {} ({:?})",
                stream.user_login, position
            );
            if let Some(grid) = new_state.screen.grid.get_mut() {
                grid.focus = position;
            }
            new_state.navigation.playback = Some(stream);
        }
        None => {
            let err = TuiError::InvalidGridPosition(position.section, position.row);
            debug!("NAV: {}", err);
        }
    }
    (new_state, Effect::None)
}

/// Dismissing the panel makes the screen visible again, which re-activates it
fn close_playback(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    match new_state.navigation.playback.take() {
        Some(stream) => {
            debug!("NAV: Closed playback for {}", stream.user_login);
            (new_state, Effect::Action(Action::Activate))
        }
        None => (new_state, Effect::None),
    }
}

fn launch_player(state: AppState) -> (AppState, Effect) {
    let Some(stream) = state.navigation.playback.clone() else {
        return (state, Effect::None);
    };

    let mut new_state = state;
    let player = new_state.system.config.player.clone();
    new_state
        .system
        .set_status_message(format!("Starting {} for {}...", player.command, stream.display_name()));

    let effect = Effect::LaunchPlayer {
        stream: Box::new(stream),
        player,
    };
    (new_state, effect)
}
