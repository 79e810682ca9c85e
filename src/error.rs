//! Error types for essay-search
//!
//! Only loading, configuration and the terminal host can fail. The filter
//! engine itself has no error paths: empty collections, empty queries and
//! queries that match nothing are all valid steady states.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for essay-search operations
#[derive(Error, Debug)]
pub enum EssayError {
    #[error("Failed to read '{0}': {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Malformed essay file '{0}': {1}")]
    JsonError(PathBuf, serde_json::Error),

    #[error("Essay '{title}' has an invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { title: String, value: String },

    #[error("Malformed config file '{0}': {1}")]
    ConfigError(PathBuf, String),

    #[error("No essay file given: pass --essays or set `essays` in the config file")]
    NoEssayFile,

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("JSON error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type alias for essay-search operations
pub type Result<T> = std::result::Result<T, EssayError>;

impl EssayError {
    /// Wrap an error coming out of the terminal backend
    pub fn terminal(context: &str, err: impl std::fmt::Display) -> Self {
        EssayError::TerminalError(format!("{}: {}", context, err))
    }

    /// Check if this error is about user-supplied input (as opposed to the environment)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            EssayError::JsonError(_, _)
                | EssayError::InvalidDate { .. }
                | EssayError::ConfigError(_, _)
                | EssayError::NoEssayFile
        )
    }
}
