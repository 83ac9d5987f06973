use thiserror::Error;

/// Errors returned by the Twitch Helix client
#[derive(Error, Debug)]
pub enum TwitchApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Twitch API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing Twitch credentials: {0}")]
    MissingCredentials(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),
}

impl TwitchApiError {
    /// True for errors the user can fix by editing the config file
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingCredentials(_))
    }
}
