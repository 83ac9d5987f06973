use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::models::{AppAccessToken, DataPage, Game, HelixErrorBody, Stream};
use crate::config::TwitchConfig;
use crate::error::TwitchApiError;

/// Client for the subset of Twitch Helix the stream grid needs
///
/// Every request carries `Client-Id` and a bearer token. The token is either
/// the configured user/app token, or an app access token obtained once
/// through the client-credentials flow and reused for the client's lifetime.
pub struct TwitchClient {
    http: Client,
    client_id: String,
    client_secret: Option<String>,
    api_base_url: String,
    auth_base_url: String,
    token: Mutex<Option<String>>,
}

impl std::fmt::Debug for TwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchClient")
            .field("client_id", &self.client_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl TwitchClient {
    pub fn new(config: &TwitchConfig) -> Result<Self, TwitchApiError> {
        if config.client_id.trim().is_empty() {
            return Err(TwitchApiError::MissingCredentials(
                "twitch.client_id is not set".to_string(),
            ));
        }
        if config.access_token.is_none() && config.client_secret.is_none() {
            return Err(TwitchApiError::MissingCredentials(
                "set twitch.access_token or twitch.client_secret".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            client_id: config.client_id.trim().to_string(),
            client_secret: config.client_secret.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_base_url: config.auth_base_url.trim_end_matches('/').to_string(),
            token: Mutex::new(config.access_token.clone()),
        })
    }

    /// Look up a game by its exact display name
    pub async fn game_by_name(&self, name: &str) -> Result<Game, TwitchApiError> {
        let page: DataPage<Game> = self.get("games", &[("name", name.to_string())]).await?;
        page.data
            .into_iter()
            .next()
            .ok_or_else(|| TwitchApiError::GameNotFound(name.to_string()))
    }

    /// Live streams for a game id, sorted by viewers (Helix default order)
    pub async fn streams_by_game_id(
        &self,
        game_id: &str,
        first: u32,
    ) -> Result<Vec<Stream>, TwitchApiError> {
        let page: DataPage<Stream> = self
            .get(
                "streams",
                &[("game_id", game_id.to_string()), ("first", first.to_string())],
            )
            .await?;
        debug!("HELIX: {} streams for game_id={}", page.data.len(), game_id);
        Ok(page.data)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TwitchApiError> {
        let url = format!("{}/{}", self.api_base_url, path);
        let token = self.bearer_token().await?;
        let request = self.http.get(&url).query(query);
        Self::send(self.authorize(request, &token)).await
    }

    fn authorize(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header("Client-Id", &self.client_id)
            .bearer_auth(token)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, TwitchApiError> {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn bearer_token(&self) -> Result<String, TwitchApiError> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            return Ok(token.clone());
        }

        let secret = self.client_secret.as_ref().ok_or_else(|| {
            TwitchApiError::MissingCredentials("twitch.client_secret is not set".to_string())
        })?;

        let url = format!("{}/oauth2/token", self.auth_base_url);
        let request = self.http.post(&url).form(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", secret.as_str()),
            ("grant_type", "client_credentials"),
        ]);
        let token: AppAccessToken = Self::send(request).await?;
        info!("HELIX: obtained app access token (expires in {}s)", token.expires_in);

        *guard = Some(token.access_token.clone());
        Ok(token.access_token)
    }
}

/// Build a status error, preferring the Helix error message when present
fn status_error(status: StatusCode, body: &str) -> TwitchApiError {
    let message = serde_json::from_str::<HelixErrorBody>(body)
        .map(|e| if e.message.is_empty() { e.error } else { e.message })
        .unwrap_or_else(|_| body.trim().to_string());
    TwitchApiError::Status {
        status: status.as_u16(),
        message,
    }
}
