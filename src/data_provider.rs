/// Trait for providing stream data, abstracting over the Helix client and mock implementations
use async_trait::async_trait;

use crate::cache;
use crate::error::TwitchApiError;
use crate::layout_constants::HELIX_MAX_PAGE_SIZE;
use crate::twitch::{Game, Stream, TwitchClient};

/// Trait for stream data providers, implemented by both TwitchClient and MockClient
#[async_trait]
pub trait StreamDataProvider: Send + Sync {
    /// Resolve a game by its display name
    async fn game_by_name(&self, name: &str) -> Result<Game, TwitchApiError>;

    /// Get up to `first` live streams for a game id, most viewed first
    async fn streams_by_game_id(
        &self,
        game_id: &str,
        first: u32,
    ) -> Result<Vec<Stream>, TwitchApiError>;
}

#[async_trait]
impl StreamDataProvider for TwitchClient {
    async fn game_by_name(&self, name: &str) -> Result<Game, TwitchApiError> {
        self.game_by_name(name).await
    }

    async fn streams_by_game_id(
        &self,
        game_id: &str,
        first: u32,
    ) -> Result<Vec<Stream>, TwitchApiError> {
        self.streams_by_game_id(game_id, first).await
    }
}

/// Top live streams for a game, skipping `offset` and returning at most `limit`
///
/// Helix pages with cursors rather than offsets, so this requests
/// `offset + limit` entries (capped at one Helix page) and drops the first
/// `offset`. The game lookup goes through the game cache.
pub async fn fetch_top_streams(
    provider: &dyn StreamDataProvider,
    game_name: &str,
    offset: u32,
    limit: u32,
) -> Result<Vec<Stream>, TwitchApiError> {
    let game = cache::fetch_game_cached(provider, game_name).await?;
    let first = offset.saturating_add(limit).min(HELIX_MAX_PAGE_SIZE);
    let streams = provider.streams_by_game_id(&game.id, first).await?;

    Ok(streams
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect())
}
