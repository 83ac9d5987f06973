// Module declarations
pub mod components;
pub mod widgets;

// Core modules
pub mod action;
pub mod component;
pub mod effects;
pub mod error;
pub mod grid;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use component::{Component, Effect, Element};
pub use effects::DataEffects;
pub use error::{TuiError, TuiResult};
pub use grid::{Direction, GridMetrics, GridPosition, StreamGrid};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::{AppState, ScreenState};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::data_provider::StreamDataProvider;

/// Key poll timeout; completions from the effect executor are picked up at this rate
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main entry point for TUI mode
///
/// Shows the stream grid for `config.game` and runs until the user quits.
pub async fn run(client: Arc<dyn StreamDataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(client));

    let mut initial_state = AppState::default();
    initial_state.screen = ScreenState::for_game(config.game.clone(), config.fetch_limit);
    initial_state.system.config = config;
    initial_state.system.reset_status_message();

    let mut runtime = Runtime::new(initial_state, data_effects);

    // The screen becomes visible: start the first load
    runtime.dispatch(Action::Activate);

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the runtime closes the action channel, so fetches still in
    // flight have nowhere to deliver their result.
    drop(runtime);
    tracing::debug!("LOOP: Screen torn down");

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process any actions from effects FIRST (so completed loads re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        let size = terminal.size()?;
        let viewport = runtime.state().system.viewport;
        if size.width != viewport.width || size.height != viewport.height {
            tracing::debug!(
                "DRAW: viewport changed: {}x{} -> {}x{}",
                viewport.width,
                viewport.height,
                size.width,
                size.height
            );
            runtime.dispatch(Action::UpdateViewport {
                width: size.width,
                height: size.height,
            });
        }

        terminal.draw(|f| {
            let area = f.area();
            let element = runtime.build();
            let config = &runtime.state().system.config.display;
            Renderer::new().render(element, area, f.buffer_mut(), config);
        })?;

        if actions_processed > 0 {
            continue;
        }

        if !event::poll(INPUT_POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            let Some(action) = key_to_action(key, runtime.state()) else {
                continue;
            };

            if matches!(action, Action::Quit) {
                tracing::debug!("ACTION: Quitting application");
                runtime.dispatch(action);
                return Ok(());
            }

            runtime.dispatch(action);
        }
    }
}
