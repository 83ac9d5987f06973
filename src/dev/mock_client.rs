/// Mock Twitch client for development and testing
use crate::data_provider::StreamDataProvider;
use crate::error::TwitchApiError;
use crate::twitch::{Game, Stream};
use async_trait::async_trait;
use tracing::info;

use crate::fixtures;

/// Number of live streams the mock reports for every game
const MOCK_STREAM_COUNT: usize = 26;

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient {
    stream_count: usize,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self {
            stream_count: MOCK_STREAM_COUNT,
        }
    }

    /// Mock client reporting a specific number of live streams (0 exercises the error view)
    pub fn with_stream_count(stream_count: usize) -> Self {
        Self { stream_count }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StreamDataProvider for MockClient {
    async fn game_by_name(&self, name: &str) -> Result<Game, TwitchApiError> {
        info!("MockClient: Returning mock game for {}", name);
        Ok(fixtures::create_mock_game(name))
    }

    async fn streams_by_game_id(
        &self,
        game_id: &str,
        first: u32,
    ) -> Result<Vec<Stream>, TwitchApiError> {
        info!("MockClient: Returning {} mock streams for game {}", first, game_id);
        let count = self.stream_count.min(first as usize);
        Ok(fixtures::create_mock_streams(game_id, count))
    }
}
