use crate::layout_constants::STATUS_BAR_HEIGHT;
use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::state::AppState;

use super::{PlaybackPanel, PlaybackPanelProps, StatusBar, StreamGridScreen, StreamGridScreenProps};

/// Root App component
///
/// Lays the stream screen out above the status bar and stacks the playback
/// panel over the screen while a stream is selected.
pub struct App;

impl Component for App {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        tracing::trace!(
            "APP: App.view() called with phase={:?}",
            props.screen.phase
        );
        vertical(
            [
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ],
            vec![self.render_screen(props), StatusBar.view(props, &())],
        )
    }
}

impl App {
    fn render_screen(&self, state: &AppState) -> Element {
        let screen = StreamGridScreen.view(
            &StreamGridScreenProps {
                screen: state.screen.clone(),
                modal_open: state.navigation.playback.is_some(),
            },
            &(),
        );

        let modal = match &state.navigation.playback {
            Some(stream) => PlaybackPanel.view(
                &PlaybackPanelProps {
                    stream: stream.clone(),
                    player_command: state.system.config.player.command.clone(),
                },
                &(),
            ),
            None => Element::None,
        };

        screen.with_overlay(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_stream;
    use crate::tui::testing::render_element;

    #[test]
    fn test_app_renders_status_bar_at_bottom() {
        let mut state = AppState::default();
        state.system.set_status_message("hello".to_string());

        let lines = render_element(App.view(&state, &()), 60, 10);

        assert!(lines[8].starts_with("─"));
        assert!(lines[9].starts_with(" hello"));
    }

    #[test]
    fn test_app_shows_playback_panel_when_selected() {
        let mut state = AppState::default();
        state.navigation.playback = Some(create_mock_stream("1", 2));

        let lines = render_element(App.view(&state, &()), 80, 24);

        assert!(lines.iter().any(|l| l.contains("SpeedrunSam2")));
        assert!(lines.iter().any(|l| l.contains("Enter: play in streamlink")));
    }
}
