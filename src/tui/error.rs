use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("No player command configured")]
    EmptyPlayerCommand,

    #[error("Failed to start {command}: {source}")]
    PlayerLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No stream at section={0}, row={1}")]
    InvalidGridPosition(usize, usize),
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
