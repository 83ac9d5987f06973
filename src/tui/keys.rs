/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions. The playback panel is modal,
/// so while it is open only its own keys and quit are live.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::grid::Direction;
use super::state::AppState;

/// Keys that work regardless of what is on screen
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

fn handle_playback_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Esc | KeyCode::Backspace => Some(Action::ClosePlayback),
        KeyCode::Enter | KeyCode::Char('p') => Some(Action::LaunchPlayer),
        _ => None,
    }
}

fn handle_grid_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveFocus(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveFocus(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveFocus(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveFocus(Direction::Down)),
        KeyCode::Enter => Some(Action::SelectFocused),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Activate),
        _ => None,
    }
}

/// Convert a key event to an action, if it maps to one in the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?}", key.code);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if state.navigation.playback.is_some() {
        return handle_playback_keys(key.code);
    }

    handle_grid_keys(key.code)
}
