//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and tag support.

use std::collections::HashSet;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds), reset on overwrite
    pub created_at: u64,
    /// Lifetime in milliseconds
    pub ttl_ms: u64,
    /// Labels used for bulk invalidation
    pub tags: HashSet<String>,
    /// Insertion order, breaks ties between equal `created_at`
    pub sequence: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `created_at` - Insertion time in Unix milliseconds
    /// * `ttl_ms` - Lifetime in milliseconds
    /// * `tags` - Invalidation labels
    /// * `sequence` - Store-wide insertion counter
    pub fn new(
        value: V,
        created_at: u64,
        ttl_ms: u64,
        tags: HashSet<String>,
        sequence: u64,
    ) -> Self {
        Self {
            value,
            created_at,
            ttl_ms,
            tags,
            sequence,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at time `now`.
    ///
    /// Boundary condition: an entry is expired only once strictly more than
    /// `ttl_ms` has elapsed since `created_at`. At exactly `ttl_ms` it is
    /// still served.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now.saturating_sub(self.created_at) > self.ttl_ms
    }

    // == Tag Match ==
    /// Returns true if the entry carries any of the given tags.
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag.as_ref()))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> HashSet<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", 1_000, 60_000, tags(&["cases"]), 7);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.created_at, 1_000);
        assert_eq!(entry.ttl_ms, 60_000);
        assert_eq!(entry.sequence, 7);
        assert!(entry.tags.contains("cases"));
    }

    #[test]
    fn test_entry_expiration_boundary() {
        let entry = CacheEntry::new((), 1_000, 500, HashSet::new(), 0);

        assert!(!entry.is_expired_at(1_000));
        // Exactly ttl elapsed is still fresh
        assert!(!entry.is_expired_at(1_500));
        assert!(entry.is_expired_at(1_501));
    }

    #[test]
    fn test_zero_ttl_expires_after_one_ms() {
        let entry = CacheEntry::new((), 1_000, 0, HashSet::new(), 0);

        assert!(!entry.is_expired_at(1_000));
        assert!(entry.is_expired_at(1_001));
    }

    #[test]
    fn test_clock_behind_creation_is_not_expired() {
        let entry = CacheEntry::new((), 5_000, 10, HashSet::new(), 0);
        assert!(!entry.is_expired_at(4_000));
    }

    #[test]
    fn test_max_ttl_never_expires() {
        let entry = CacheEntry::new((), 1_000, u64::MAX, HashSet::new(), 0);
        assert!(!entry.is_expired_at(u64::MAX));
    }

    #[test]
    fn test_has_any_tag() {
        let entry = CacheEntry::new((), 0, 10, tags(&["cases", "user:42"]), 0);

        assert!(entry.has_any_tag(&["user:42"]));
        assert!(entry.has_any_tag(&["evidence", "cases"]));
        assert!(!entry.has_any_tag(&["evidence"]));
        assert!(!entry.has_any_tag::<&str>(&[]));
    }
}
