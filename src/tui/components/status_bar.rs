use chrono::{DateTime, Local};

use crate::tui::component::{Component, Element};
use crate::tui::state::AppState;
use crate::tui::widgets::StatusBarWidget;

/// StatusBar component - status message on the left, load summary on the right
pub struct StatusBar;

impl Component for StatusBar {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(StatusBarWidget {
            message: props.system.status_message.clone(),
            is_error: props.system.status_is_error,
            summary: summary(props),
        }))
    }
}

fn summary(state: &AppState) -> String {
    if state.screen.is_loading() {
        return "Loading...".to_string();
    }
    let count = state.screen.streams().len();
    match state.system.last_refresh {
        Some(refreshed) => {
            let at: DateTime<Local> = refreshed.into();
            format!("{} live | {}", count, at.format("%H:%M:%S"))
        }
        None => format!("{} live", count),
    }
}
