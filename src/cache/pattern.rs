//! Key Pattern Module
//!
//! Exact and wildcard key matchers used for pattern invalidation.

use regex::Regex;

use crate::error::{CacheError, Result};

/// Character that turns a pattern into a wildcard.
pub const WILDCARD: char = '*';

// == Key Pattern ==
/// A key matcher: either one exact key or a `*` wildcard expression.
#[derive(Debug, Clone)]
pub enum KeyPattern {
    /// Matches exactly one key
    Exact(String),
    /// Matches every key containing a run of text that fits the pattern
    Wildcard(Regex),
}

impl KeyPattern {
    // == Parse ==
    /// Builds a matcher from a pattern string.
    ///
    /// Without `*` the pattern is an exact key. Otherwise every literal segment
    /// is regex-escaped and `*` becomes `.*`. The resulting expression is
    /// searched for anywhere in the key, so `cases:*` also matches
    /// `archived-cases:7`. An empty pattern is rejected.
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(CacheError::InvalidPattern("pattern is empty".to_string()));
        }
        if !pattern.contains(WILDCARD) {
            return Ok(Self::Exact(pattern.to_string()));
        }

        let expr = pattern
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        Regex::new(&expr)
            .map(Self::Wildcard)
            .map_err(|e| CacheError::InvalidPattern(format!("{}: {}", pattern, e)))
    }

    // == Matches ==
    /// Returns true if `key` is selected by this pattern.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Exact(exact) => exact == key,
            Self::Wildcard(regex) => regex.is_match(key),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern() {
        let pattern = KeyPattern::parse("cases:42").unwrap();

        assert!(matches!(pattern, KeyPattern::Exact(_)));
        assert!(pattern.matches("cases:42"));
        assert!(!pattern.matches("cases:420"));
        assert!(!pattern.matches("old:cases:42"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let pattern = KeyPattern::parse("cases:*").unwrap();

        assert!(matches!(pattern, KeyPattern::Wildcard(_)));
        assert!(pattern.matches("cases:42"));
        assert!(pattern.matches("cases:user:7"));
        assert!(!pattern.matches("evidence:1"));
    }

    #[test]
    fn test_wildcard_is_unanchored() {
        let pattern = KeyPattern::parse("cases:*").unwrap();
        assert!(pattern.matches("archived-cases:7"));
    }

    #[test]
    fn test_inner_wildcard() {
        let pattern = KeyPattern::parse("evidence:*:user").unwrap();

        assert!(pattern.matches("evidence:case:9:user"));
        assert!(!pattern.matches("evidence:case:9"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = KeyPattern::parse("search:a.b(c)+*").unwrap();

        assert!(pattern.matches("search:a.b(c)+anything"));
        assert!(!pattern.matches("search:aXb(c)+anything"));
        assert!(!pattern.matches("search:a.bcc+anything"));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = KeyPattern::parse("");
        assert!(matches!(result, Err(CacheError::InvalidPattern(_))));
    }

    #[test]
    fn test_lone_wildcard_matches_everything() {
        let pattern = KeyPattern::parse("*").unwrap();

        assert!(pattern.matches(""));
        assert!(pattern.matches("users:email:a@b.c"));
    }
}
