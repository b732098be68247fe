//! Intake dialogue engine.
//!
//! One [`DialogueEngine`] drives one conversation: it takes a user line per
//! turn, updates the profile under construction, answers, and writes the
//! whole transcript to its sink when the session ends.

#![deny(missing_docs, unsafe_code)]

/// Session state threaded through every turn.
pub mod context;

/// The turn-handling state machine.
pub mod engine;

/// Error types for the dialogue engine.
pub mod error;

/// Agent reply texts.
pub mod replies;

pub use context::SessionContext;
pub use engine::{DialogueEngine, TurnIssue, TurnOutcome};
pub use error::{AgentError, AgentResult};
