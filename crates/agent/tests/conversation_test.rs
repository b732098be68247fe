use chrono::NaiveDate;
use reggy_agent::{AgentError, DialogueEngine, TurnIssue};
use reggy_core::{
    ConversationState, DateCandidate, FileTranscript, MemoryTranscript, ReggyConfig,
    TranscriptSink, TurnRecord,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

#[test]
fn intake_scenario_walks_every_state() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = DialogueEngine::new(&ReggyConfig::default(), MemoryTranscript::new(), today());
    let mut states = vec![engine.state()];

    for input in ["Alice Smith", "12 Mar 2001", "I'm happy today", "bye"] {
        let outcome = engine.handle_turn(input)?;
        assert_eq!(outcome.issue, None, "{input}");
        states.push(outcome.state);
    }

    assert_eq!(
        states,
        vec![
            ConversationState::AwaitingName,
            ConversationState::AwaitingDob,
            ConversationState::AwaitingMood,
            ConversationState::FreeChat,
            ConversationState::Terminated,
        ]
    );

    let profile = engine.profile();
    assert_eq!(profile.full_name(), Some("Alice Smith"));
    assert_eq!(profile.surname(), Some("Smith"));
    assert_eq!(profile.date_of_birth(), Some(DateCandidate::new(12, 3, 2001)));
    assert_eq!(profile.age(), Some(25));

    let expected_lines = [
        "Reggy++: Hi! I'm Reggy++. What's your name?",
        "You: Alice Smith",
        "Reggy++: Nice to meet you, Alice Smith! Surname: Smith.",
        "Reggy++: When's your birthday?",
        "You: 12 Mar 2001",
        "Reggy++: Cool. You're 25 years old.",
        "Reggy++: How you feeling today, Alice?",
        "You: I'm happy today",
        "Reggy++: Nice. Feeling happy.",
        "You: bye",
        "Reggy++: Goodbye, Alice Smith!",
    ];
    assert_eq!(engine.transcript().lines(), expected_lines);

    let blocks = engine.sink().blocks();
    assert_eq!(blocks.len(), 1);
    let bar = "=".repeat(40);
    let expected_block = format!(
        "\n{bar}\nRUN START : 2026-10-16\n{bar}\n{}\n{bar}\nRUN END\n{bar}\n",
        expected_lines.join("\n")
    );
    assert_eq!(blocks[0], expected_block);

    assert!(matches!(
        engine.handle_turn("hello again"),
        Err(AgentError::SessionClosed)
    ));
    Ok(())
}

#[test]
fn retries_do_not_advance_or_mutate_profile() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = DialogueEngine::new(&ReggyConfig::default(), MemoryTranscript::new(), today());

    let issues: Vec<Option<TurnIssue>> = ["", "Bob", "whenever", "31 Feb 2001", "1990-07-04", "hmm", "fine"]
        .into_iter()
        .map(|input| engine.handle_turn(input).map(|o| o.issue))
        .collect::<Result<_, _>>()?;

    assert_eq!(
        issues,
        vec![
            Some(TurnIssue::EmptyInput),
            None,
            Some(TurnIssue::UnparsableDate),
            Some(TurnIssue::ImplausibleAge),
            None,
            Some(TurnIssue::AmbiguousMood),
            None,
        ]
    );
    assert_eq!(engine.state(), ConversationState::FreeChat);
    assert_eq!(engine.profile().surname(), None);
    assert_eq!(engine.profile().age(), Some(36));
    assert!(engine.sink().blocks().is_empty());
    Ok(())
}

#[test]
fn custom_agent_name_prefixes_every_agent_line() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReggyConfig {
        agent_name: "Intake".to_string(),
        user_prefix: "> ".to_string(),
        ..ReggyConfig::default()
    };
    let mut engine = DialogueEngine::new(&config, MemoryTranscript::new(), today());
    assert_eq!(engine.greeting(), "Intake: Hi! I'm Intake. What's your name?");

    let outcome = engine.handle_turn("goodbye")?;
    assert_eq!(outcome.replies, vec!["Intake: Goodbye!".to_string()]);
    assert_eq!(engine.transcript().lines()[1], "> goodbye");
    Ok(())
}

#[test]
fn session_appends_to_transcript_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reggy.log");

    for name in ["Alice Smith", "Bob Jones"] {
        let mut engine =
            DialogueEngine::new(&ReggyConfig::default(), FileTranscript::new(&path), today());
        engine.handle_turn(name)?;
        engine.handle_turn("exit")?;
    }

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content.matches("RUN START : 2026-10-16").count(), 2);
    assert!(content.contains("Reggy++: Goodbye, Alice Smith!"));
    assert!(content.contains("Reggy++: Goodbye, Bob Jones!"));
    Ok(())
}

struct FailingSink;

impl TranscriptSink for FailingSink {
    fn flush(&mut self, _record: &TurnRecord, _run_date: NaiveDate) -> reggy_core::Result<()> {
        Err(reggy_core::Error::transcript("disk full"))
    }
}

#[test]
fn flush_failure_is_reported_to_caller() {
    let mut engine = DialogueEngine::new(&ReggyConfig::default(), FailingSink, today());
    let err = engine.handle_turn("bye").expect_err("flush must fail");
    assert!(matches!(err, AgentError::Transcript(_)));
    assert!(err.to_string().contains("disk full"));
    assert!(engine.is_terminated());
    assert_eq!(
        engine.transcript().lines().last().map(String::as_str),
        Some("Reggy++: Goodbye!")
    );
}
