use chrono::Utc;

use crate::tui::component::{Component, Element};
use crate::tui::widgets::PlaybackPanelWidget;
use crate::twitch::Stream;

#[derive(Clone, Debug)]
pub struct PlaybackPanelProps {
    pub stream: Stream,
    pub player_command: String,
}

/// PlaybackPanel component - modal shown after a tile is selected
pub struct PlaybackPanel;

impl Component for PlaybackPanel {
    type Props = PlaybackPanelProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(PlaybackPanelWidget {
            stream: props.stream.clone(),
            player_command: props.player_command.clone(),
            now: Utc::now(),
        }))
    }
}
