//! Core types, errors, and configuration for Reggy.
//!
//! This crate provides the foundational types shared by the analysis
//! components, the dialogue engine and the command-line front end, plus the
//! append-only transcript store a finished session is written to.

pub mod config;
pub mod constants;
pub mod error;
pub mod transcript;
pub mod types;

// Re-exports for convenience
pub use config::ReggyConfig;
pub use error::{Error, Result};
pub use transcript::{
    render_transcript, DiscardTranscript, FileTranscript, MemoryTranscript, TranscriptSink,
};
pub use types::*;
