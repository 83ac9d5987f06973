use crate::data_provider::StreamDataProvider;
use crate::error::TwitchApiError;
use crate::twitch::Game;
use cached::proc_macro::cached;

/// Game ids never change, so a resolved name is kept for a day.
/// Only successful lookups are cached.
///
/// The cache is process-wide and keyed by the normalized name alone, so it
/// assumes one provider per process: a game resolved through one provider is
/// returned for every other. Tests that use different providers pick
/// distinct game names.
#[cached(
    name = "GAME_CACHE",
    type = "cached::TimedSizedCache<String, Game>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(64, 86400) }",
    convert = r#"{ name.trim().to_lowercase() }"#,
    result = true
)]
pub async fn fetch_game_cached(
    client: &dyn StreamDataProvider,
    name: &str,
) -> Result<Game, TwitchApiError> {
    client.game_by_name(name.trim()).await
}
