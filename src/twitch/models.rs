//! Wire models for the Twitch Helix endpoints used by the stream grid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL of a channel page, used for playback hand-off
pub const CHANNEL_BASE_URL: &str = "https://www.twitch.tv";

/// A game (category) as returned by `GET /helix/games`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub box_art_url: String,
}

/// One live broadcast as returned by `GET /helix/streams`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    pub user_id: String,
    pub user_login: String,
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(rename = "type", default)]
    pub stream_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: u64,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Stream {
    /// Public channel URL handed to the external player
    pub fn channel_url(&self) -> String {
        format!("{}/{}", CHANNEL_BASE_URL, self.user_login)
    }

    /// Time elapsed since the broadcast started, `None` if the clock is behind
    pub fn uptime(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let elapsed = now.signed_duration_since(self.started_at);
        if elapsed < chrono::Duration::zero() {
            None
        } else {
            Some(elapsed)
        }
    }

    /// Display name, falling back to the login when Twitch omits it
    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            &self.user_login
        } else {
            &self.user_name
        }
    }
}

/// Cursor returned alongside paged Helix responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub cursor: Option<String>,
}

/// Generic `{"data": [...], "pagination": {...}}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct DataPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Response of the client-credentials token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AppAccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
}

/// Error body Helix returns on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct HelixErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const STREAMS_JSON: &str = r#"{
        "data": [
            {
                "id": "40952121085",
                "user_id": "101051819",
                "user_login": "afro",
                "user_name": "Afro",
                "game_id": "32982",
                "game_name": "Grand Theft Auto V",
                "type": "live",
                "title": "Jacob: Digital Den Laptops & Routers | NoPixel | !MAINGEAR !FCF",
                "tags": ["English"],
                "viewer_count": 1490,
                "started_at": "2021-03-10T03:18:11Z",
                "language": "en",
                "thumbnail_url": "https://static-cdn.jtvnw.net/previews-ttv/live_user_afro-{width}x{height}.jpg",
                "tag_ids": [],
                "is_mature": false
            }
        ],
        "pagination": {
            "cursor": "eyJiIjp7IkN1cnNvciI6ImV5SnpJam80T0RNeE1qUXhPRFV1TURBd01EQXdNRFFzSW1RaU9tWmhiSE5sZlE9PSJ9fQ"
        }
    }"#;

    #[test]
    fn test_deserialize_streams_page() {
        let page: DataPage<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        assert_eq!(page.data.len(), 1);
        let stream = &page.data[0];
        assert_eq!(stream.user_login, "afro");
        assert_eq!(stream.stream_type, "live");
        assert_eq!(stream.viewer_count, 1490);
        assert_eq!(stream.tags, vec!["English".to_string()]);
        assert!(page.pagination.cursor.is_some());
    }

    #[test]
    fn test_deserialize_games_page_without_pagination() {
        let json = r#"{"data":[{"id":"33214","name":"Fortnite","box_art_url":"https://x/{width}x{height}.jpg","igdb_id":"1905"}]}"#;
        let page: DataPage<Game> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data[0].name, "Fortnite");
        assert_eq!(page.pagination, Pagination::default());
    }

    #[test]
    fn test_channel_url() {
        let page: DataPage<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        assert_eq!(page.data[0].channel_url(), "https://www.twitch.tv/afro");
    }

    #[test]
    fn test_uptime() {
        let page: DataPage<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        let stream = &page.data[0];
        let now = Utc.with_ymd_and_hms(2021, 3, 10, 5, 18, 11).unwrap();
        assert_eq!(stream.uptime(now), Some(chrono::Duration::hours(2)));

        let before = Utc.with_ymd_and_hms(2021, 3, 10, 0, 0, 0).unwrap();
        assert_eq!(stream.uptime(before), None);
    }

    #[test]
    fn test_display_name_falls_back_to_login() {
        let mut page: DataPage<Stream> = serde_json::from_str(STREAMS_JSON).unwrap();
        let stream = &mut page.data[0];
        assert_eq!(stream.display_name(), "Afro");
        stream.user_name.clear();
        assert_eq!(stream.display_name(), "afro");
    }
}
