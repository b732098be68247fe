//! Error types for Reggy core functionality.

use thiserror::Error;

/// Main error type for Reggy.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data parsing error: {0}")]
    Parse(String),
    /// Transcript store could not be written.
    #[error("Transcript error: {0}")]
    Transcript(String),
}

/// Result type for Reggy operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a transcript error
    pub fn transcript(msg: impl Into<String>) -> Self {
        Self::Transcript(msg.into())
    }
}
