// Component library exports

pub mod app;
pub mod playback_panel;
pub mod status_bar;
pub mod stream_grid_screen;

pub use app::App;
pub use playback_panel::{PlaybackPanel, PlaybackPanelProps};
pub use status_bar::StatusBar;
pub use stream_grid_screen::{StreamGridScreen, StreamGridScreenProps};
