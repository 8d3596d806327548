//! Error types for pomotimer.

use thiserror::Error;

/// Errors that can occur while running the timer or reading its log.
#[derive(Error, Debug)]
pub enum TimerError {
    /// User-supplied value was rejected (e.g. a non-positive duration).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Something that was expected to exist does not.
    #[error("Not found: {0}")]
    NotFound(String),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session log read/write error.
    #[error("Session log error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Terminal setup, drawing or event handling failed.
    #[error("Terminal error: {0}")]
    Tui(String),
}

impl TimerError {
    /// Whether this error means the requested item is absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
