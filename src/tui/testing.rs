//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use async_trait::async_trait;
use ratatui::{buffer::Buffer, layout::Rect};
use std::sync::Arc;
use std::time::Duration;

use crate::data_provider::StreamDataProvider;
use crate::error::TwitchApiError;
use crate::fixtures::{create_mock_game, create_mock_streams};
use crate::twitch::{Game, Stream};

use super::component::Element;
use super::effects::DataEffects;
use super::renderer::Renderer;
use super::runtime::Runtime;
use super::state::AppState;
use super::widgets::testing::test_config;

/// Provider backed by fixture data, optionally failing every stream request
pub struct StubProvider {
    pub stream_count: usize,
    pub fail: bool,
}

#[async_trait]
impl StreamDataProvider for StubProvider {
    async fn game_by_name(&self, name: &str) -> Result<Game, TwitchApiError> {
        Ok(create_mock_game(name))
    }

    async fn streams_by_game_id(
        &self,
        game_id: &str,
        first: u32,
    ) -> Result<Vec<Stream>, TwitchApiError> {
        if self.fail {
            return Err(TwitchApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        let count = self.stream_count.min(first as usize);
        Ok(create_mock_streams(game_id, count))
    }
}

/// DataEffects over a provider that serves `stream_count` fixture streams
pub fn create_test_data_effects(stream_count: usize) -> Arc<DataEffects> {
    Arc::new(DataEffects::new(Arc::new(StubProvider {
        stream_count,
        fail: false,
    })))
}

/// DataEffects whose stream requests always fail
pub fn create_failing_data_effects() -> Arc<DataEffects> {
    Arc::new(DataEffects::new(Arc::new(StubProvider {
        stream_count: 0,
        fail: true,
    })))
}

/// Runtime with default state over fixture data
pub fn create_test_runtime(stream_count: usize) -> Runtime {
    Runtime::new(AppState::default(), create_test_data_effects(stream_count))
}

/// Process queued actions until `done` holds for the state
///
/// # Panics
///
/// Panics after five seconds without the condition becoming true.
pub async fn wait_for(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) {
    let poll_interval = Duration::from_millis(10);
    let max_wait = Duration::from_secs(5);
    let start = tokio::time::Instant::now();

    loop {
        runtime.process_actions();
        if done(runtime.state()) {
            return;
        }
        assert!(
            start.elapsed() < max_wait,
            "condition not reached after {:?}",
            max_wait
        );
        tokio::time::sleep(poll_interval).await;
    }
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Render an element tree into a fresh buffer and return its lines
pub fn render_element(element: Element, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Renderer::new().render(element, area, &mut buf, &test_config());
    buffer_lines(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_provider_caps_at_first() {
        let provider = StubProvider {
            stream_count: 30,
            fail: false,
        };
        let streams = provider.streams_by_game_id("1", 20).await.unwrap();
        assert_eq!(streams.len(), 20);
    }

    #[tokio::test]
    async fn test_failing_stub_provider() {
        let provider = StubProvider {
            stream_count: 30,
            fail: true,
        };
        assert!(provider.streams_by_game_id("1", 20).await.is_err());
    }

    #[test]
    fn test_render_element_none_is_blank() {
        let lines = render_element(Element::None, 4, 2);
        assert_eq!(lines, vec!["    ", "    "]);
    }
}
