//! Lenient answer matching for buzzer responses.
//!
//! A response is checked against the canonical answer with a cascade of
//! progressively looser rules; the first rule that accepts wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum share of words two multi-word answers must have in common.
pub const WORD_OVERLAP_THRESHOLD: f64 = 0.75;

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("punctuation pattern is valid")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Rule of the matching cascade that accepted a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Equal after lower-casing and trimming.
    Exact,
    /// One answer is a substring of the other.
    Containment,
    /// Equal once punctuation is removed.
    Punctuation,
    /// Enough significant words in common.
    WordOverlap,
}

/// Result of comparing a response to the canonical answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub is_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<MatchRule>,
}

impl MatchOutcome {
    fn accepted(rule: MatchRule) -> Self {
        Self {
            is_match: true,
            rule: Some(rule),
        }
    }

    fn rejected() -> Self {
        Self {
            is_match: false,
            rule: None,
        }
    }
}

/// Whether `candidate` should be accepted for `canonical`.
pub fn is_match(candidate: &str, canonical: &str) -> bool {
    match_answer(candidate, canonical).is_match
}

/// Run the matching cascade and report which rule accepted, if any.
///
/// Containment is deliberately loose: a one-letter canonical answer accepts
/// any response containing that letter, and an empty response is contained
/// in every answer.
pub fn match_answer(candidate: &str, canonical: &str) -> MatchOutcome {
    let user_clean = candidate.to_lowercase();
    let user_clean = user_clean.trim();
    let correct_clean = canonical.to_lowercase();
    let correct_clean = correct_clean.trim();

    if user_clean == correct_clean {
        return MatchOutcome::accepted(MatchRule::Exact);
    }

    if correct_clean.contains(user_clean) || user_clean.contains(correct_clean) {
        return MatchOutcome::accepted(MatchRule::Containment);
    }

    let user_stripped = strip_punctuation(user_clean);
    let correct_stripped = strip_punctuation(correct_clean);

    if user_stripped == correct_stripped {
        return MatchOutcome::accepted(MatchRule::Punctuation);
    }

    match coverage(&user_stripped, &correct_stripped) {
        Some(ratio) if ratio >= WORD_OVERLAP_THRESHOLD => {
            MatchOutcome::accepted(MatchRule::WordOverlap)
        }
        _ => MatchOutcome::rejected(),
    }
}

/// Share of significant words two answers have in common.
///
/// Returns `None` unless both answers have more than one word longer than
/// two characters after punctuation is removed.
pub fn word_overlap(candidate: &str, canonical: &str) -> Option<f64> {
    let user = strip_punctuation(candidate.to_lowercase().trim());
    let correct = strip_punctuation(canonical.to_lowercase().trim());
    coverage(&user, &correct)
}

fn strip_punctuation(s: &str) -> String {
    let stripped = PUNCTUATION.replace_all(s, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").into_owned()
}

fn significant_words(s: &str) -> Vec<&str> {
    s.split(' ').filter(|w| w.chars().count() > 2).collect()
}

fn coverage(user: &str, correct: &str) -> Option<f64> {
    let user_words = significant_words(user);
    let correct_words = significant_words(correct);

    if user_words.len() <= 1 || correct_words.len() <= 1 {
        return None;
    }

    let matching = user_words
        .iter()
        .filter(|word| correct_words.contains(*word))
        .count();
    let total = user_words.len().max(correct_words.len());

    Some(matching as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(candidate: &str, canonical: &str) -> Option<MatchRule> {
        match_answer(candidate, canonical).rule
    }

    #[test]
    fn test_exact_ignores_case_and_surrounding_space() {
        assert_eq!(rule("  GRAVITY ", "Gravity"), Some(MatchRule::Exact));
    }

    #[test]
    fn test_reflexive() {
        for s in ["Mona Lisa", "Pi (π)", "x", "The Declaration of Independence"] {
            assert!(is_match(s, s), "{}", s);
        }
    }

    #[test]
    fn test_containment() {
        assert_eq!(rule("newton", "Sir Isaac Newton"), Some(MatchRule::Containment));
        assert_eq!(rule("the mona lisa!", "Mona Lisa"), Some(MatchRule::Containment));
    }

    #[test]
    fn test_punctuation_insensitive() {
        assert_eq!(rule("st. louis", "St Louis"), Some(MatchRule::Punctuation));
        assert_eq!(rule("pi π", "Pi (π)"), Some(MatchRule::Punctuation));
        assert_eq!(rule("new york.", "new - york"), Some(MatchRule::Punctuation));
    }

    #[test]
    fn test_word_overlap() {
        assert_eq!(
            rule("theory of general relativity", "general theory of relativity"),
            Some(MatchRule::WordOverlap)
        );
        assert_eq!(
            word_overlap("theory of general relativity", "general theory of relativity"),
            Some(1.0)
        );
    }

    #[test]
    fn test_word_overlap_below_threshold() {
        let overlap = word_overlap("isaac newton physicist", "sir isaac newton").unwrap();
        assert!(overlap < WORD_OVERLAP_THRESHOLD);
        assert!(!is_match("isaac newton physicist", "sir isaac newton"));
    }

    #[test]
    fn test_word_overlap_needs_multiple_words() {
        assert_eq!(word_overlap("gravity", "friction"), None);
        assert_eq!(word_overlap("an ox", "big red ox"), None);
    }

    #[test]
    fn test_mismatch() {
        assert!(!is_match("gravity", "friction"));
        assert_eq!(match_answer("gravity", "friction"), MatchOutcome::rejected());
    }

    // Containment over-accepts; these pin the current behavior.
    #[test]
    fn test_known_over_acceptance_of_short_answers() {
        assert!(is_match("the answer is c", "C"));
        assert!(is_match("zebra", "a"));
    }

    #[test]
    fn test_known_over_acceptance_of_empty_response() {
        assert!(is_match("", "Sir Isaac Newton"));
        assert!(is_match("   ", "Gravity"));
    }
}
