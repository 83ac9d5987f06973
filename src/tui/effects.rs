use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::action::Action;
use super::component::Effect;
use super::error::{TuiError, TuiResult};
use crate::config::PlayerConfig;
use crate::data_provider::{fetch_top_streams, StreamDataProvider};
use crate::twitch::Stream;

/// Effect handler for stream fetching and player hand-off
///
/// Each method returns an `Effect::Async` whose future resolves to the
/// action that reports the outcome back to the runtime.
pub struct DataEffects {
    client: Arc<dyn StreamDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn StreamDataProvider>) -> Self {
        Self { client }
    }

    /// Fetch the top streams of a game; the completion carries `generation`
    pub fn fetch_streams(&self, game: String, offset: u32, limit: u32, generation: u64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = fetch_top_streams(client.as_ref(), &game, offset, limit).await;
            if let Err(e) = &result {
                warn!("Stream fetch for '{}' failed: {}", game, e);
            }
            Action::StreamsLoaded {
                generation,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }

    /// Start the external player for a stream without waiting for it to exit
    pub fn launch_player(&self, stream: Stream, player: PlayerConfig) -> Effect {
        Effect::Async(Box::pin(async move {
            let result = spawn_player(&stream, &player)
                .map(|_| format!("Playing {} in {}", stream.display_name(), player.command))
                .map_err(|e| e.to_string());
            Action::PlayerLaunched(result)
        }))
    }
}

fn spawn_player(stream: &Stream, player: &PlayerConfig) -> TuiResult<()> {
    if player.command.trim().is_empty() {
        return Err(TuiError::EmptyPlayerCommand);
    }

    let args = player.resolved_args(&stream.channel_url(), &stream.user_login);
    debug!("EFFECT: Launching {} {:?}", player.command, args);

    let mut child = Command::new(&player.command)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| TuiError::PlayerLaunch {
            command: player.command.clone(),
            source,
        })?;

    info!("Started {} for {}", player.command, stream.user_login);

    // Reap the child so it does not linger as a zombie
    tokio::spawn(async move {
        if let Err(e) = child.wait().await {
            warn!("Player process wait failed: {}", e);
        }
    });

    Ok(())
}
