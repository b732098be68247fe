//! Date-of-birth extraction.
//!
//! Text is split into runs of ASCII digits, ASCII letters, whitespace, other
//! word characters and single symbols. Three date shapes are then matched
//! against that token stream, always in the same order:
//!
//! 1. named month: `12 Mar 2001`
//! 2. numeric: `03-12-2001`, `3/12/01`, `3.12.2001`
//! 3. ISO-like: `2001-03-12`
//!
//! The first shape that yields a candidate wins. Within a shape the leftmost
//! occurrence is the one considered. Digit runs must stand on their own: a
//! letter, non-ASCII word character or underscore touching a run disqualifies
//! it, the same way a `\b` word boundary would.

use crate::error::{AnalysisError, AnalysisResult};
use chrono::{Datelike, NaiveDate};
use reggy_core::constants::{MAX_PLAUSIBLE_AGE, MIN_PLAUSIBLE_AGE};
use reggy_core::DateCandidate;
use serde::Serialize;

/// Month names and abbreviations accepted by the named-month shape.
const MONTHS: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Two-digit years above this land in the 1900s, the rest in the 2000s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Which textual layout produced a date candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateShape {
    /// `<day> <month name> <year>`.
    NamedMonth,
    /// `<a>-<b>-<year>` with day/month order inferred.
    Numeric,
    /// `<year>-<month>-<day>`.
    IsoLike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Digits,
    Letters,
    Space,
    /// Non-ASCII letters/digits and `_`: word characters the shapes never accept.
    Word,
    Symbol,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
}

fn classify(c: char) -> TokenKind {
    if c.is_ascii_digit() {
        TokenKind::Digits
    } else if c.is_ascii_alphabetic() {
        TokenKind::Letters
    } else if c.is_whitespace() {
        TokenKind::Space
    } else if c.is_alphanumeric() || c == '_' {
        TokenKind::Word
    } else {
        TokenKind::Symbol
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (idx, c) in text.char_indices() {
        let kind = classify(c);
        match current {
            Some(prev) if prev == kind && kind != TokenKind::Symbol => {}
            Some(prev) => {
                tokens.push(Token {
                    kind: prev,
                    text: &text[start..idx],
                });
                start = idx;
                current = Some(kind);
            }
            None => {
                start = idx;
                current = Some(kind);
            }
        }
    }
    if let Some(kind) = current {
        tokens.push(Token {
            kind,
            text: &text[start..],
        });
    }
    tokens
}

/// Token stream with the boundary rules the shapes share.
struct Scanner<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: tokenize(text),
        }
    }

    fn kind(&self, idx: usize) -> Option<TokenKind> {
        self.tokens.get(idx).map(|t| t.kind)
    }

    fn is_separator(c: Option<TokenKind>) -> bool {
        matches!(c, Some(TokenKind::Space) | Some(TokenKind::Symbol))
    }

    /// Digit run at `idx` whose length lies in `len` (digits are ASCII, so bytes == chars).
    fn digits(&self, idx: usize, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
        let token = self.tokens.get(idx)?;
        if token.kind != TokenKind::Digits || !len.contains(&token.text.len()) {
            return None;
        }
        token.text.parse().ok()
    }

    /// Like [`Scanner::digits`] but the run must not be glued to a word character on its left.
    fn leading_digits(&self, idx: usize, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
        let opens = idx == 0 || Self::is_separator(self.kind(idx - 1));
        if !opens {
            return None;
        }
        self.digits(idx, len)
    }

    /// Like [`Scanner::digits`] but the run must not be glued to a word character on its right.
    fn trailing_digits(&self, idx: usize, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
        let closes = self.kind(idx + 1).is_none() || Self::is_separator(self.kind(idx + 1));
        if !closes {
            return None;
        }
        self.digits(idx, len)
    }

    fn date_separator(&self, idx: usize) -> Option<()> {
        let token = self.tokens.get(idx)?;
        (token.kind == TokenKind::Symbol && matches!(token.text, "-" | "/" | "."))
            .then_some(())
    }

    fn space(&self, idx: usize) -> Option<()> {
        (self.kind(idx)? == TokenKind::Space).then_some(())
    }

    fn letters(&self, idx: usize) -> Option<&'a str> {
        let token = self.tokens.get(idx)?;
        (token.kind == TokenKind::Letters).then_some(token.text)
    }

    /// First match of `shape` scanning left to right.
    fn leftmost<T>(&self, shape: impl Fn(&Self, usize) -> Option<T>) -> Option<T> {
        (0..self.tokens.len()).find_map(|idx| shape(self, idx))
    }

    fn named_month_at(&self, idx: usize) -> Option<(u32, &'a str, u32)> {
        let day = self.leading_digits(idx, 1..=2)?;
        self.space(idx + 1)?;
        let month = self.letters(idx + 2)?;
        self.space(idx + 3)?;
        let year = self.trailing_digits(idx + 4, 2..=4)?;
        Some((day, month, year))
    }

    fn numeric_at(&self, idx: usize) -> Option<(u32, u32, u32)> {
        let first = self.leading_digits(idx, 1..=2)?;
        self.date_separator(idx + 1)?;
        let second = self.digits(idx + 2, 1..=2)?;
        self.date_separator(idx + 3)?;
        let year = self.trailing_digits(idx + 4, 2..=4)?;
        Some((first, second, year))
    }

    fn iso_like_at(&self, idx: usize) -> Option<(u32, u32, u32)> {
        let year = self.leading_digits(idx, 4..=4)?;
        self.date_separator(idx + 1)?;
        let month = self.digits(idx + 2, 1..=2)?;
        self.date_separator(idx + 3)?;
        let day = self.trailing_digits(idx + 4, 1..=2)?;
        Some((year, month, day))
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|(_, number)| *number)
}

/// Expand a year written with fewer than three digits.
fn window_year(year: u32) -> i32 {
    let year = year as i32;
    if year >= 100 {
        year
    } else if year > TWO_DIGIT_YEAR_PIVOT {
        1900 + year
    } else {
        2000 + year
    }
}

/// Candidates naming a month outside 1..=12 are dropped here; the day is
/// left for calendar validation.
fn candidate(day: u32, month: u32, year: i32) -> Option<DateCandidate> {
    (1..=12).contains(&month).then(|| DateCandidate::new(day, month, year))
}

fn named_month(scanner: &Scanner<'_>) -> Option<DateCandidate> {
    let (day, month_name, year) = scanner.leftmost(Scanner::named_month_at)?;
    let Some(month) = month_from_name(month_name) else {
        tracing::debug!(month = month_name, "unknown month name, shape rejected");
        return None;
    };
    candidate(day, month, window_year(year))
}

fn numeric(scanner: &Scanner<'_>) -> Option<DateCandidate> {
    let (first, second, year) = scanner.leftmost(Scanner::numeric_at)?;
    // A field above 12 can only be the day; otherwise month comes first.
    let (day, month) = if first > 12 {
        (first, second)
    } else {
        (second, first)
    };
    candidate(day, month, window_year(year))
}

fn iso_like(scanner: &Scanner<'_>) -> Option<DateCandidate> {
    let (year, month, day) = scanner.leftmost(Scanner::iso_like_at)?;
    candidate(day, month, year as i32)
}

/// Parse the named-month shape only, e.g. `"born 12 Mar 2001"`.
pub fn parse_named_month(text: &str) -> Option<DateCandidate> {
    named_month(&Scanner::new(text))
}

/// Parse the numeric shape only, e.g. `"03-12-2001"`.
pub fn parse_numeric(text: &str) -> Option<DateCandidate> {
    numeric(&Scanner::new(text))
}

/// Parse the ISO-like shape only, e.g. `"2001-03-12"`.
pub fn parse_iso_like(text: &str) -> Option<DateCandidate> {
    iso_like(&Scanner::new(text))
}

/// Find a date in free text, reporting which shape matched.
pub fn extract_date_with_shape(text: &str) -> Option<(DateShape, DateCandidate)> {
    let scanner = Scanner::new(text);
    let found = named_month(&scanner)
        .map(|d| (DateShape::NamedMonth, d))
        .or_else(|| numeric(&scanner).map(|d| (DateShape::Numeric, d)))
        .or_else(|| iso_like(&scanner).map(|d| (DateShape::IsoLike, d)));

    if let Some((shape, date)) = &found {
        tracing::debug!(?shape, %date, "date extracted");
    }
    found
}

/// Find a date in free text.
pub fn extract_date(text: &str) -> Option<DateCandidate> {
    extract_date_with_shape(text).map(|(_, date)| date)
}

/// Whole years between a birth date and `today`.
///
/// Fails when the candidate is not a real calendar day (e.g. 31 Feb). The
/// result is negative for dates after `today`.
pub fn calculate_age(birth: &DateCandidate, today: NaiveDate) -> AnalysisResult<i32> {
    let date = NaiveDate::from_ymd_opt(birth.year, birth.month, birth.day).ok_or(
        AnalysisError::InvalidCalendarDate {
            day: birth.day,
            month: birth.month,
            year: birth.year,
        },
    )?;

    let mut age = today.year() - date.year();
    if (today.month(), today.day()) < (date.month(), date.day()) {
        age -= 1;
    }
    Ok(age)
}

/// Age for a birth date, accepted only when it lies in the plausible range.
pub fn derive_age(birth: &DateCandidate, today: NaiveDate) -> AnalysisResult<u32> {
    let age = calculate_age(birth, today)?;
    if !(MIN_PLAUSIBLE_AGE..=MAX_PLAUSIBLE_AGE).contains(&age) {
        return Err(AnalysisError::ImplausibleAge(age));
    }
    u32::try_from(age).map_err(|_| AnalysisError::ImplausibleAge(age))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn named_month_shape() {
        assert_eq!(extract_date("12 Mar 2001"), Some(DateCandidate::new(12, 3, 2001)));
        assert_eq!(
            extract_date("I was born on 5 september 1990, honest"),
            Some(DateCandidate::new(5, 9, 1990))
        );
        assert_eq!(extract_date("7 SEPT 85"), Some(DateCandidate::new(7, 9, 1985)));
        assert_eq!(extract_date("7 Jan 05"), Some(DateCandidate::new(7, 1, 2005)));
    }

    #[test]
    fn numeric_shape_prefers_month_first_when_ambiguous() {
        let date = extract_date("03-12-2001").expect("numeric date");
        assert_eq!(date.month, 3);
        assert_eq!(date.day, 12);
        assert_eq!(date.year, 2001);
    }

    #[test]
    fn numeric_shape_uses_field_above_twelve_as_day() {
        assert_eq!(extract_date("25/12/1990"), Some(DateCandidate::new(25, 12, 1990)));
        assert_eq!(extract_date("12/25/1990"), Some(DateCandidate::new(25, 12, 1990)));
        assert_eq!(extract_date("3.4.99"), Some(DateCandidate::new(4, 3, 1999)));
        assert_eq!(extract_date("1-2-50"), Some(DateCandidate::new(2, 1, 2050)));
        assert_eq!(extract_date("1-2-51"), Some(DateCandidate::new(2, 1, 1951)));
    }

    #[test]
    fn iso_like_shape() {
        assert_eq!(extract_date("2001-03-12"), Some(DateCandidate::new(12, 3, 2001)));
        assert_eq!(
            extract_date_with_shape("dob: 1999/1/9"),
            Some((DateShape::IsoLike, DateCandidate::new(9, 1, 1999)))
        );
    }

    #[test]
    fn shapes_are_tried_in_fixed_order() {
        let text = "2001-03-12 or maybe 4/5/2002 or 9 Jun 1970";
        assert_eq!(
            extract_date_with_shape(text),
            Some((DateShape::NamedMonth, DateCandidate::new(9, 6, 1970)))
        );
        assert_eq!(
            extract_date_with_shape("2001-03-12 or maybe 4/5/2002"),
            Some((DateShape::Numeric, DateCandidate::new(5, 4, 2002)))
        );
    }

    #[test]
    fn unknown_month_name_falls_through_to_later_shapes() {
        assert_eq!(parse_named_month("12 Foo 2001"), None);
        assert_eq!(
            extract_date_with_shape("12 Foo 2001, i.e. 2001-03-12"),
            Some((DateShape::IsoLike, DateCandidate::new(12, 3, 2001)))
        );
        assert_eq!(extract_date("12 Foo 2001"), None);
    }

    #[test]
    fn digit_runs_must_stand_alone() {
        assert_eq!(extract_date("a12 Mar 2001"), None);
        assert_eq!(extract_date("12 Mar 2001x"), None);
        assert_eq!(extract_date("123 Mar 2001"), None);
        assert_eq!(extract_date("12 Mar 20011"), None);
        assert_eq!(extract_date("12 Mär 2001"), None);
        assert_eq!(extract_date("03-12-2001_"), None);
        assert_eq!(extract_date("03--12-2001"), None);
        assert_eq!(extract_date("(03-12-2001)"), Some(DateCandidate::new(12, 3, 2001)));
    }

    #[test]
    fn shapes_can_be_parsed_in_isolation() {
        assert_eq!(parse_named_month("2001-03-12"), None);
        assert_eq!(parse_numeric("12 Mar 2001"), None);
        assert_eq!(parse_numeric("2001-03-12"), None);
        assert_eq!(parse_iso_like("03-12-2001"), None);
        assert_eq!(parse_iso_like("2001.3.12"), Some(DateCandidate::new(12, 3, 2001)));
    }

    #[test]
    fn month_outside_calendar_is_not_a_candidate() {
        assert_eq!(extract_date("2001-13-05"), None);
        assert_eq!(extract_date("0-0-2001"), None);
    }

    #[test]
    fn no_date_in_text() {
        assert_eq!(extract_date("sometime in spring"), None);
        assert_eq!(extract_date(""), None);
        assert_eq!(extract_date("12 March"), None);
    }

    #[test]
    fn impossible_day_passes_extraction_but_fails_age() {
        let date = extract_date("31 Feb 2001").expect("shape matches");
        assert_eq!(date, DateCandidate::new(31, 2, 2001));
        let err = calculate_age(&date, ymd(2026, 10, 16)).expect_err("no 31 Feb");
        assert_eq!(
            err,
            AnalysisError::InvalidCalendarDate {
                day: 31,
                month: 2,
                year: 2001
            }
        );
    }

    #[test]
    fn age_turns_over_on_birthday() {
        let birth = DateCandidate::new(16, 10, 2006);
        assert_eq!(calculate_age(&birth, ymd(2026, 10, 16)), Ok(20));
        assert_eq!(calculate_age(&birth, ymd(2026, 10, 17)), Ok(20));
        assert_eq!(calculate_age(&birth, ymd(2026, 10, 15)), Ok(19));
    }

    #[test]
    fn leap_day_birthday_counts_from_march() {
        let birth = DateCandidate::new(29, 2, 2004);
        assert_eq!(calculate_age(&birth, ymd(2026, 2, 28)), Ok(21));
        assert_eq!(calculate_age(&birth, ymd(2026, 3, 1)), Ok(22));
    }

    #[test]
    fn derive_age_rejects_out_of_range() {
        let today = ymd(2026, 10, 16);
        assert_eq!(derive_age(&DateCandidate::new(1, 1, 1850), today), Err(AnalysisError::ImplausibleAge(176)));
        assert_eq!(derive_age(&DateCandidate::new(1, 1, 2030), today), Err(AnalysisError::ImplausibleAge(-4)));
        assert_eq!(derive_age(&DateCandidate::new(16, 10, 2026), today), Ok(0));
        assert_eq!(derive_age(&DateCandidate::new(16, 10, 1876), today), Ok(150));
    }
}
