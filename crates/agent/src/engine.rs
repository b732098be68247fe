//! Turn-handling state machine.
//!
//! ```text
//! AwaitingName --name--> AwaitingDob --plausible date--> AwaitingMood
//!      AwaitingMood --good/bad--> FreeChat --(any mood)--> FreeChat
//! any state --exit keyword--> Terminated (absorbing)
//! ```
//!
//! Invalid input keeps the current state. The exit keyword is checked before
//! anything else on every turn.

use crate::context::SessionContext;
use crate::error::{AgentError, AgentResult};
use crate::replies;
use chrono::NaiveDate;
use reggy_analysis::{
    contains_exit_keyword, derive_age, extract_date, extract_surname, strip_trailing_punctuation,
    MoodDetector,
};
use reggy_core::{ConversationState, Polarity, ReggyConfig, TranscriptSink, TurnRecord, UserProfile};

/// Recoverable problem with a user turn. The agent has already answered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnIssue {
    /// Blank line.
    EmptyInput,
    /// No date shape found while waiting for a date of birth.
    UnparsableDate,
    /// Date found, but not a calendar day or the age is out of range.
    ImplausibleAge,
    /// Neither an exact nor a fuzzy mood keyword.
    AmbiguousMood,
}

/// What one turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Agent lines, prefixed, in the order they were said.
    pub replies: Vec<String>,
    /// State after the turn.
    pub state: ConversationState,
    /// Set when the input could not be used as intended.
    pub issue: Option<TurnIssue>,
}

impl TurnOutcome {
    /// True when this turn ended the session.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Drives one intake conversation.
pub struct DialogueEngine<S: TranscriptSink> {
    session: SessionContext,
    sink: S,
    today: NaiveDate,
    mood: MoodDetector,
    greeting: String,
}

impl<S: TranscriptSink> DialogueEngine<S> {
    /// Start a session. `today` is used for ages and the transcript header.
    ///
    /// The greeting is recorded as the first transcript line.
    pub fn new(config: &ReggyConfig, sink: S, today: NaiveDate) -> Self {
        let mut session = SessionContext::new(config);
        session.say(replies::greeting(&config.agent_name));
        let greeting = session.take_replies().concat();
        Self {
            session,
            sink,
            today,
            mood: MoodDetector::default(),
            greeting,
        }
    }

    /// Opening agent line, prefixed.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Current protocol state.
    pub fn state(&self) -> ConversationState {
        self.session.state()
    }

    /// Profile collected so far.
    pub fn profile(&self) -> &UserProfile {
        self.session.profile()
    }

    /// Transcript so far.
    pub fn transcript(&self) -> &TurnRecord {
        self.session.record()
    }

    /// True once the session has ended.
    pub fn is_terminated(&self) -> bool {
        self.state().is_terminal()
    }

    /// Sink the transcript is written to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the sink, ending the engine.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Process one user line.
    ///
    /// Returns [`AgentError::SessionClosed`] once the session has ended, and
    /// [`AgentError::Transcript`] if this turn ended the session but the
    /// transcript could not be written.
    pub fn handle_turn(&mut self, input: &str) -> AgentResult<TurnOutcome> {
        if self.is_terminated() {
            return Err(AgentError::SessionClosed);
        }

        let text = input.trim();
        self.session.hear(text);

        let issue = if contains_exit_keyword(text) {
            let name = self
                .session
                .profile()
                .full_name()
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            self.session.say(replies::farewell(name.as_deref()));
            self.terminate()?;
            None
        } else if text.is_empty() {
            self.session.say(replies::EMPTY_INPUT);
            Some(TurnIssue::EmptyInput)
        } else {
            match self.session.state() {
                ConversationState::AwaitingName => on_name(&mut self.session, text),
                ConversationState::AwaitingDob => on_birth_date(&mut self.session, text, self.today),
                ConversationState::AwaitingMood => on_mood(&mut self.session, &self.mood, text),
                ConversationState::FreeChat => on_chat(&mut self.session, &self.mood, text),
                ConversationState::Terminated => return Err(AgentError::SessionClosed),
            }
        };

        Ok(TurnOutcome {
            replies: self.session.take_replies(),
            state: self.session.state(),
            issue,
        })
    }

    /// End the session without a farewell, e.g. when input runs out.
    ///
    /// Writes the transcript if the session was still open; does nothing
    /// afterwards.
    pub fn close(&mut self) -> AgentResult<()> {
        if self.is_terminated() {
            return Ok(());
        }
        tracing::warn!(state = %self.state(), "session closed before exit keyword");
        self.terminate()
    }

    fn terminate(&mut self) -> AgentResult<()> {
        self.session.transition(ConversationState::Terminated);
        self.sink.flush(self.session.record(), self.today)?;
        Ok(())
    }
}

fn on_name(session: &mut SessionContext, text: &str) -> Option<TurnIssue> {
    let name = strip_trailing_punctuation(text).to_string();
    let surname = extract_surname(&name);
    session.say(replies::name_acknowledged(&name, surname.as_deref()));
    session.say(replies::ASK_BIRTHDAY);
    session.profile_mut().set_name(name, surname);
    session.transition(ConversationState::AwaitingDob);
    None
}

fn on_birth_date(session: &mut SessionContext, text: &str, today: NaiveDate) -> Option<TurnIssue> {
    let Some(birth) = extract_date(text) else {
        session.say(replies::DATE_FORMAT_HINT);
        return Some(TurnIssue::UnparsableDate);
    };

    let age = match derive_age(&birth, today) {
        Ok(age) => age,
        Err(err) => {
            tracing::warn!(date = %birth, error = %err, "date of birth rejected");
            session.say(replies::AGE_LOOKS_WRONG);
            return Some(TurnIssue::ImplausibleAge);
        }
    };

    session.profile_mut().set_birth(birth, age);
    session.say(replies::age_acknowledged(age));
    let first = session
        .profile()
        .first_name()
        .unwrap_or("there")
        .to_string();
    session.say(replies::ask_mood(&first));
    session.transition(ConversationState::AwaitingMood);
    None
}

fn on_mood(session: &mut SessionContext, detector: &MoodDetector, text: &str) -> Option<TurnIssue> {
    let mood = detector.detect(text);
    match (mood.polarity, mood.matched_keyword) {
        (Polarity::Positive, Some(word)) => session.say(replies::mood_positive(word)),
        (Polarity::Negative, Some(word)) => session.say(replies::mood_negative(word)),
        _ => {
            session.say(replies::MOOD_NARROWING);
            return Some(TurnIssue::AmbiguousMood);
        }
    }
    session.transition(ConversationState::FreeChat);
    None
}

fn on_chat(session: &mut SessionContext, detector: &MoodDetector, text: &str) -> Option<TurnIssue> {
    let mood = detector.detect(text);
    match (mood.polarity, mood.matched_keyword) {
        (Polarity::Positive, Some(word)) => session.say(replies::chat_positive(word)),
        (Polarity::Negative, Some(word)) => session.say(replies::chat_negative(word)),
        _ => {
            if text.ends_with('?') {
                session.say(replies::CHAT_QUESTION);
            } else {
                session.say(replies::CHAT_STATEMENT);
            }
            return Some(TurnIssue::AmbiguousMood);
        }
    }
    None
}
