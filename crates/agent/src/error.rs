use thiserror::Error;

/// Errors surfaced by the dialogue engine.
///
/// Bad user input is never an error: it is answered and reported as a
/// [`crate::TurnIssue`] instead.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A turn was submitted after the session ended.
    #[error("Session already terminated")]
    SessionClosed,
    /// The transcript could not be written at session end.
    #[error("Transcript flush failed: {0}")]
    Transcript(#[from] reggy_core::Error),
}

/// Result alias for dialogue operations.
pub type AgentResult<T> = Result<T, AgentError>;
