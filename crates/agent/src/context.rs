use reggy_core::{ConversationState, ReggyConfig, TurnRecord, UserProfile};

/// Everything one conversation owns: the profile being built, the current
/// state, and the transcript so far.
///
/// A context is created per session and handed to each turn handler; nothing
/// about a session lives outside it.
#[derive(Debug, Clone)]
pub struct SessionContext {
    profile: UserProfile,
    state: ConversationState,
    record: TurnRecord,
    agent_prefix: String,
    user_prefix: String,
    pending: Vec<String>,
}

impl SessionContext {
    /// Fresh context waiting for the user's name.
    pub fn new(config: &ReggyConfig) -> Self {
        Self {
            profile: UserProfile::new(),
            state: ConversationState::AwaitingName,
            record: TurnRecord::new(),
            agent_prefix: config.agent_prefix(),
            user_prefix: config.user_prefix.clone(),
            pending: Vec::new(),
        }
    }

    /// Profile collected so far.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub(crate) fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    /// Current protocol state.
    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Transcript so far.
    pub fn record(&self) -> &TurnRecord {
        &self.record
    }

    /// Move to `next`, logging the change.
    pub(crate) fn transition(&mut self, next: ConversationState) {
        if next != self.state {
            tracing::info!(from = %self.state, to = %next, "conversation state changed");
        }
        self.state = next;
    }

    /// Record an agent line and queue it as a reply of the current turn.
    pub(crate) fn say(&mut self, text: impl AsRef<str>) {
        let line = format!("{}{}", self.agent_prefix, text.as_ref());
        self.record.push(line.clone());
        self.pending.push(line);
    }

    /// Record a user line.
    pub(crate) fn hear(&mut self, text: &str) {
        self.record.push(format!("{}{}", self.user_prefix, text));
    }

    /// Replies queued since the last call.
    pub(crate) fn take_replies(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}
