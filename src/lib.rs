pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod tui;
pub mod twitch;

#[cfg(feature = "development")]
pub mod dev;
