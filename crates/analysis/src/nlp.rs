/// Words that end the conversation wherever they appear in a turn.
pub const EXIT_KEYWORDS: [&str; 4] = ["exit", "quit", "bye", "goodbye"];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when the text contains an exit keyword as a whole word, in any case.
///
/// "Bye!" and "ok, goodbye" count; "byebye" and "quitting" do not.
pub fn contains_exit_keyword(text: &str) -> bool {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .any(|w| EXIT_KEYWORDS.iter().any(|k| w.eq_ignore_ascii_case(k)))
}

/// Remove a trailing run of `.`, `,`, `!` and `?`.
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(['.', ',', '!', '?'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_keyword_matches_whole_words_only() {
        assert!(contains_exit_keyword("bye"));
        assert!(contains_exit_keyword("OK, Goodbye!"));
        assert!(contains_exit_keyword("I want to quit now"));
        assert!(contains_exit_keyword("exit."));
        assert!(!contains_exit_keyword("byebye"));
        assert!(!contains_exit_keyword("quitting time"));
        assert!(!contains_exit_keyword("exit_code"));
        assert!(!contains_exit_keyword(""));
    }

    #[test]
    fn trailing_punctuation_run_is_removed() {
        assert_eq!(strip_trailing_punctuation("Alice Smith!?"), "Alice Smith");
        assert_eq!(strip_trailing_punctuation("Mr. Smith."), "Mr. Smith");
        assert_eq!(strip_trailing_punctuation("Dr. No"), "Dr. No");
        assert_eq!(strip_trailing_punctuation("?!"), "");
    }
}
