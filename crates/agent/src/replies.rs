//! Every sentence the agent can say, without the speaker prefix.

/// Opening line.
pub fn greeting(agent_name: &str) -> String {
    format!("Hi! I'm {}. What's your name?", agent_name)
}

/// Blank input.
pub const EMPTY_INPUT: &str = "Please type something.";

/// Name accepted, with the surname echoed back when there is one.
pub fn name_acknowledged(name: &str, surname: Option<&str>) -> String {
    match surname {
        Some(surname) => format!("Nice to meet you, {}! Surname: {}.", name, surname),
        None => format!("Nice to meet you, {}!", name),
    }
}

/// Question that opens the date-of-birth step.
pub const ASK_BIRTHDAY: &str = "When's your birthday?";

/// No date shape found.
pub const DATE_FORMAT_HINT: &str = "Can't read that date. Try '12 Mar 2001' or '03-12-2001'.";

/// Date found but not a real day, or the age is out of range.
pub const AGE_LOOKS_WRONG: &str = "That age looks wrong. Try again.";

/// Date accepted.
pub fn age_acknowledged(age: u32) -> String {
    format!("Cool. You're {} years old.", age)
}

/// Question that opens the mood step.
pub fn ask_mood(first_name: &str) -> String {
    format!("How you feeling today, {}?", first_name)
}

/// Mood answer was positive.
pub fn mood_positive(word: &str) -> String {
    format!("Nice. Feeling {}.", word)
}

/// Mood answer was negative.
pub fn mood_negative(word: &str) -> String {
    format!("Sorry. Feeling {}. Wanna talk?", word)
}

/// Mood answer matched neither table.
pub const MOOD_NARROWING: &str = "More like good or bad?";

/// Free chat, positive turn.
pub fn chat_positive(word: &str) -> String {
    format!("Love that you're {}.", word)
}

/// Free chat, negative turn.
pub fn chat_negative(word: &str) -> String {
    format!("Yeah, {} days happen.", word)
}

/// Free chat, neutral question.
pub const CHAT_QUESTION: &str = "Interesting. What do you think?";

/// Free chat, neutral statement.
pub const CHAT_STATEMENT: &str = "Tell me more.";

/// Closing line.
pub fn farewell(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Goodbye, {}!", name),
        None => "Goodbye!".to_string(),
    }
}
