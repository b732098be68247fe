/// Honorifics removed from the front of a name before the surname is taken.
const HONORIFICS: [&str; 2] = ["mr", "mrs"];

/// Drop one leading honorific ("Mr", "Mrs", any case, optional trailing period).
///
/// The honorific must be followed by whitespace and more text; a bare "Mr."
/// is left as it is.
pub fn strip_honorific(full_name: &str) -> &str {
    let trimmed = full_name.trim();
    let Some((head, rest)) = trimmed.split_once(char::is_whitespace) else {
        return trimmed;
    };
    let word = head.strip_suffix('.').unwrap_or(head);
    if HONORIFICS.iter().any(|h| word.eq_ignore_ascii_case(h)) {
        rest.trim_start()
    } else {
        trimmed
    }
}

/// Last alphabetic word of a full name, or `None` for single-word names.
pub fn extract_surname(full_name: &str) -> Option<String> {
    let words: Vec<&str> = strip_honorific(full_name)
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();

    if words.len() < 2 {
        return None;
    }
    words.last().map(|w| w.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surname_is_last_word() {
        assert_eq!(extract_surname("Alice Smith").as_deref(), Some("Smith"));
        assert_eq!(extract_surname("Mary Jane Watson").as_deref(), Some("Watson"));
        assert_eq!(extract_surname("Jean-Luc Picard").as_deref(), Some("Picard"));
    }

    #[test]
    fn honorific_is_stripped_first() {
        assert_eq!(extract_surname("Mr. John Smith").as_deref(), Some("Smith"));
        assert_eq!(extract_surname("mrs jones"), None);
        assert_eq!(strip_honorific("MRS.  Ada Lovelace"), "Ada Lovelace");
        assert_eq!(strip_honorific("Mr."), "Mr.");
        assert_eq!(strip_honorific("Mrsmith Jones"), "Mrsmith Jones");
    }

    #[test]
    fn single_word_name_has_no_surname() {
        assert_eq!(extract_surname("Madonna"), None);
        assert_eq!(extract_surname(""), None);
        assert_eq!(extract_surname("R2 D2"), Some("D".to_string()));
    }
}
