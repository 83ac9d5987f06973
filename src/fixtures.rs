/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for screenshots and debugging
/// 3. Benchmarks - providing consistent data for performance testing
use chrono::{DateTime, TimeZone, Utc};

use crate::twitch::{Game, Stream};

const CHANNEL_NAMES: [&str; 8] = [
    "NightOwlPlays",
    "PixelPaladin",
    "SpeedrunSam",
    "CozyCorner",
    "FragMaster",
    "RetroRita",
    "TacticalTom",
    "LunaLive",
];

const TITLES: [&str; 6] = [
    "Ranked grind until diamond | !socials",
    "Any% world record attempts",
    "Chill vibes and viewer games",
    "First playthrough, no spoilers please!",
    "Tournament practice with the squad",
    "24h charity marathon for the local shelter",
];

const LANGUAGES: [&str; 4] = ["en", "fr", "de", "es"];

/// Fixed broadcast start used by all mock streams
pub fn mock_started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 20, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create a mock game; the id is derived from the name so lookups are stable
pub fn create_mock_game(name: &str) -> Game {
    let id = name
        .trim()
        .to_lowercase()
        .bytes()
        .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
        % 1_000_000;
    Game {
        id: id.to_string(),
        name: name.trim().to_string(),
        box_art_url: format!(
            "https://static-cdn.jtvnw.net/ttv-boxart/{}-{{width}}x{{height}}.jpg",
            id
        ),
    }
}

/// Create one mock stream at a given rank (0 = most viewed)
pub fn create_mock_stream(game_id: &str, rank: usize) -> Stream {
    let name = CHANNEL_NAMES[rank % CHANNEL_NAMES.len()];
    let login = format!("streamer{:02}", rank);
    Stream {
        id: format!("4{:010}", rank),
        user_id: format!("10{:06}", rank),
        user_login: login.clone(),
        user_name: format!("{}{}", name, rank),
        game_id: game_id.to_string(),
        game_name: "Mock Game".to_string(),
        stream_type: "live".to_string(),
        title: TITLES[rank % TITLES.len()].to_string(),
        viewer_count: 50_000u64.saturating_sub(rank as u64 * 1_700),
        started_at: mock_started_at() + chrono::Duration::minutes(rank as i64 * 7),
        language: LANGUAGES[rank % LANGUAGES.len()].to_string(),
        thumbnail_url: format!(
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_{}-{{width}}x{{height}}.jpg",
            login
        ),
        tags: vec!["English".to_string()],
    }
}

/// Create `count` mock streams, sorted by descending viewer count
pub fn create_mock_streams(game_id: &str, count: usize) -> Vec<Stream> {
    (0..count).map(|rank| create_mock_stream(game_id, rank)).collect()
}
