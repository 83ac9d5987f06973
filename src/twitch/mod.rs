//! Twitch Helix client and wire models

pub mod client;
pub mod models;

pub use client::TwitchClient;
pub use models::{Game, Stream};
