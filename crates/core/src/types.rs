//! Shared data types for the intake conversation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day/month/year triple pulled out of free text.
///
/// Only the month is range-checked when the candidate is produced; whether
/// the triple names a real calendar day is decided when the age is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateCandidate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateCandidate {
    /// Build a candidate from its parts.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for DateCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Facts collected about the user during one session.
///
/// `age` and `date_of_birth` are always set together, so a profile never
/// carries an age without the date it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    full_name: Option<String>,
    surname: Option<String>,
    date_of_birth: Option<DateCandidate>,
    age: Option<u32>,
}

impl UserProfile {
    /// Empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the full name and the surname derived from it.
    pub fn set_name(&mut self, full_name: impl Into<String>, surname: Option<String>) {
        self.full_name = Some(full_name.into());
        self.surname = surname;
    }

    /// Record a date of birth together with the age it yields.
    pub fn set_birth(&mut self, date_of_birth: DateCandidate, age: u32) {
        self.date_of_birth = Some(date_of_birth);
        self.age = Some(age);
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    pub fn date_of_birth(&self) -> Option<DateCandidate> {
        self.date_of_birth
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    /// First whitespace-separated word of the stored name.
    pub fn first_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
    }
}

/// Dialogue protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    /// Waiting for the user's name.
    AwaitingName,
    /// Waiting for a parseable, plausible date of birth.
    AwaitingDob,
    /// Waiting for a good/bad mood answer.
    AwaitingMood,
    /// Open-ended chat with mood-aware replies.
    FreeChat,
    /// Session over; no further turns are accepted.
    Terminated,
}

impl ConversationState {
    /// True once the session has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, ConversationState::Terminated)
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationState::AwaitingName => write!(f, "awaiting_name"),
            ConversationState::AwaitingDob => write!(f, "awaiting_dob"),
            ConversationState::AwaitingMood => write!(f, "awaiting_mood"),
            ConversationState::FreeChat => write!(f, "free_chat"),
            ConversationState::Terminated => write!(f, "terminated"),
        }
    }
}

/// Sentiment of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Unknown,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Unknown => write!(f, "unknown"),
        }
    }
}

/// Outcome of mood detection: the polarity and the table word that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResult {
    pub polarity: Polarity,
    pub matched_keyword: Option<&'static str>,
}

impl MoodResult {
    pub fn positive(keyword: &'static str) -> Self {
        Self {
            polarity: Polarity::Positive,
            matched_keyword: Some(keyword),
        }
    }

    pub fn negative(keyword: &'static str) -> Self {
        Self {
            polarity: Polarity::Negative,
            matched_keyword: Some(keyword),
        }
    }

    pub fn unknown() -> Self {
        Self {
            polarity: Polarity::Unknown,
            matched_keyword: None,
        }
    }
}

/// Ordered agent and user lines of one session.
///
/// Lines can only be appended; nothing is ever edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    lines: Vec<String>,
}

impl TurnRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
