//! Query term handling
//!
//! The one query rule this pipeline enforces: terms are trimmed of
//! surrounding whitespace and must reach a minimum length before a
//! suggestion request may be issued.

use serde::{Deserialize, Serialize};

/// A normalized suggestion term captured from user input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestTerm {
    /// The trimmed term
    term: String,
    /// Original raw input
    raw: String,
}

impl SuggestTerm {
    /// Parse a raw input string, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Self {
        Self {
            term: raw.trim().to_string(),
            raw: raw.to_string(),
        }
    }

    /// The trimmed term
    pub fn as_str(&self) -> &str {
        &self.term
    }

    /// The raw input as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the term is long enough for a query to be issued
    ///
    /// Counts characters, not bytes, so accented input is measured the way
    /// the user perceives it.
    pub fn meets_minimum(&self, min_len: usize) -> bool {
        self.term.chars().count() >= min_len
    }

    /// Check if the term is empty after trimming
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let term = SuggestTerm::parse("  carla  ");
        assert_eq!(term.as_str(), "carla");
        assert_eq!(term.raw(), "  carla  ");
    }

    #[test]
    fn test_minimum_length_boundary() {
        assert!(!SuggestTerm::parse("car").meets_minimum(4));
        assert!(SuggestTerm::parse("carl").meets_minimum(4));
        assert!(SuggestTerm::parse("carla").meets_minimum(4));
    }

    #[test]
    fn test_whitespace_does_not_count_toward_length() {
        assert!(!SuggestTerm::parse("  abc   ").meets_minimum(4));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "joão" is 4 characters but 5 bytes
        assert!(SuggestTerm::parse("joão").meets_minimum(4));
        assert!(!SuggestTerm::parse("joã").meets_minimum(4));
    }

    #[test]
    fn test_empty_input() {
        let term = SuggestTerm::parse("   ");
        assert!(term.is_empty());
        assert!(!term.meets_minimum(4));
    }
}
