//! Fact extraction for the Reggy intake conversation.
//!
//! This crate turns free-form user text into structured facts: dates of
//! birth and the ages they imply, surnames, moods, and the exit command.
//! Every function here is pure and synchronous.

#![deny(missing_docs, unsafe_code)]

/// Levenshtein edit distance.
pub mod distance;

/// Date-of-birth extraction and age derivation.
pub mod dates;

/// Keyword-based mood detection with typo tolerance.
pub mod sentiment;

/// Honorific stripping and surname extraction.
pub mod names;

/// Small text helpers shared by the dialogue layer.
pub mod nlp;

/// Error types for analysis operations.
pub mod error;

pub use dates::{calculate_age, derive_age, extract_date, extract_date_with_shape, DateShape};
pub use distance::edit_distance;
pub use error::{AnalysisError, AnalysisResult};
pub use names::{extract_surname, strip_honorific};
pub use nlp::{contains_exit_keyword, strip_trailing_punctuation};
pub use sentiment::{detect_mood, MoodDetector};
