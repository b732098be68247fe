use crate::distance::edit_distance;
use reggy_core::MoodResult;

/// Words read as a good mood.
pub const POSITIVE_WORDS: [&str; 8] = [
    "good",
    "great",
    "happy",
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
    "fine",
];

/// Words read as a bad mood.
pub const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "sad", "angry", "terrible", "awful", "horrible", "down", "annoyed",
];

/// Largest edit distance at which a token still counts as a keyword.
pub const FUZZY_MAX_DISTANCE: usize = 2;

/// Tokens shorter than this are never fuzzy-matched.
pub const FUZZY_MIN_TOKEN_CHARS: usize = 3;

/// Keyword mood classifier with a typo-tolerant fallback.
///
/// Detection runs in two passes over the lower-cased, whitespace-split
/// tokens. The exact pass returns on the first token found in either table
/// (positive table first). Only if that finds nothing does the fuzzy pass run:
/// for each token of at least [`FUZZY_MIN_TOKEN_CHARS`] characters, the first
/// positive word and then the first negative word within
/// [`FUZZY_MAX_DISTANCE`] edits decides the result. Token order therefore
/// beats table order, and table order beats distance.
#[derive(Debug, Clone)]
pub struct MoodDetector {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    max_distance: usize,
    min_token_chars: usize,
}

impl Default for MoodDetector {
    fn default() -> Self {
        Self {
            positive: &POSITIVE_WORDS,
            negative: &NEGATIVE_WORDS,
            max_distance: FUZZY_MAX_DISTANCE,
            min_token_chars: FUZZY_MIN_TOKEN_CHARS,
        }
    }
}

impl MoodDetector {
    /// Detector over the built-in word tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one sentence.
    pub fn detect(&self, sentence: &str) -> MoodResult {
        let lowered = sentence.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();

        self.exact(&tokens)
            .or_else(|| self.fuzzy(&tokens))
            .unwrap_or_else(MoodResult::unknown)
    }

    fn exact(&self, tokens: &[&str]) -> Option<MoodResult> {
        tokens.iter().find_map(|token| {
            if let Some(word) = self.positive.iter().copied().find(|w| w == token) {
                return Some(MoodResult::positive(word));
            }
            self.negative
                .iter()
                .copied()
                .find(|w| w == token)
                .map(MoodResult::negative)
        })
    }

    fn fuzzy(&self, tokens: &[&str]) -> Option<MoodResult> {
        tokens
            .iter()
            .filter(|token| token.chars().count() >= self.min_token_chars)
            .find_map(|token| {
                let close = |word: &&'static str| edit_distance(token, word) <= self.max_distance;
                let found = match self.positive.iter().copied().find(close) {
                    Some(word) => MoodResult::positive(word),
                    None => MoodResult::negative(self.negative.iter().copied().find(close)?),
                };
                tracing::debug!(
                    token = *token,
                    keyword = ?found.matched_keyword,
                    "fuzzy mood match"
                );
                Some(found)
            })
    }
}

/// Classify a sentence with the built-in tables.
pub fn detect_mood(sentence: &str) -> MoodResult {
    MoodDetector::default().detect(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reggy_core::Polarity;

    #[test]
    fn exact_keyword_wins() {
        let mood = detect_mood("I'm happy today");
        assert_eq!(mood, MoodResult::positive("happy"));
        assert_eq!(detect_mood("Feeling DOWN"), MoodResult::negative("down"));
    }

    #[test]
    fn first_token_decides_exact_match() {
        assert_eq!(detect_mood("sad but good"), MoodResult::negative("sad"));
        assert_eq!(detect_mood("good but sad"), MoodResult::positive("good"));
    }

    #[test]
    fn exact_match_anywhere_beats_earlier_typo() {
        assert_eq!(detect_mood("grat day, bad night"), MoodResult::negative("bad"));
    }

    #[test]
    fn typo_falls_back_to_fuzzy_match() {
        let mood = detect_mood("I feel grat");
        assert_eq!(mood.polarity, Polarity::Positive);
        assert_eq!(mood.matched_keyword, Some("great"));
        assert_eq!(detect_mood("so anoyed"), MoodResult::negative("annoyed"));
    }

    #[test]
    fn fuzzy_checks_positive_table_first() {
        // "bood" is one edit from "good" and two from "bad".
        assert_eq!(detect_mood("bood"), MoodResult::positive("good"));
    }

    #[test]
    fn short_tokens_are_not_fuzzy_matched() {
        assert_eq!(detect_mood("ok go"), MoodResult::unknown());
    }

    #[test]
    fn unrelated_sentence_is_unknown() {
        let mood = detect_mood("I feel xyz");
        assert_eq!(mood.polarity, Polarity::Unknown);
        assert_eq!(mood.matched_keyword, None);
        assert_eq!(detect_mood(""), MoodResult::unknown());
    }

    #[test]
    fn punctuation_stays_attached_to_tokens() {
        // "happy!" is not an exact hit but is one edit away.
        assert_eq!(detect_mood("happy!"), MoodResult::positive("happy"));
    }
}
