//! Error types for CLI operations.

use thiserror::Error;

/// Main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dialogue session error.
    #[error("Session error: {0}")]
    Session(#[from] reggy_agent::AgentError),

    /// Core library error.
    #[error(transparent)]
    Core(#[from] reggy_core::Error),

    /// Command execution error.
    #[error("Command execution error: {0}")]
    Command(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
