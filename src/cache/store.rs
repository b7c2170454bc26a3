//! Cache Store Module
//!
//! Main cache engine: HashMap storage with TTL expiration, tag invalidation
//! and creation-order eviction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::eviction::{eviction_count, oldest_keys};
use crate::cache::{duration_ms, CacheEntry, CacheStats, Clock, KeyPattern, SystemClock};

// == Cache Store ==
/// Main cache storage with TTL, tags and capacity-bounded eviction.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    /// Time source for timestamps and expiry
    clock: Arc<dyn Clock>,
    /// Next insertion sequence number
    next_sequence: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore on the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold (at least 1)
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_entries, default_ttl, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(max_entries: usize, default_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            default_ttl,
            clock,
            next_sequence: 0,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired. Expired entries are
    /// removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// An existing key is overwritten: value, creation time, TTL and tags are
    /// all replaced. Inserting a new key into a full store first evicts the
    /// oldest-created tenth of capacity (at least one entry).
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Lifetime (uses the default TTL if None)
    /// * `tags` - Labels for bulk invalidation
    pub fn set<I, S>(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let ttl_ms = duration_ms(ttl.unwrap_or(self.default_ttl));
        let tags: HashSet<String> = tags.into_iter().map(Into::into).collect();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms, tags, sequence);
        self.entries.insert(key, entry);
        self.stats.record_set();
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_deletes(1);
        }
        removed
    }

    // == Clear By Tags ==
    /// Removes every entry carrying at least one of `tags`.
    ///
    /// Returns the number of entries removed.
    pub fn clear_by_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.has_any_tag(tags));
        let count = before - self.entries.len();

        self.stats.record_deletes(count);
        count
    }

    // == Invalidate Matching ==
    /// Deletes every key selected by `pattern`.
    ///
    /// Wildcards scan all keys. Returns the number of entries removed.
    pub fn invalidate_matching(&mut self, pattern: &KeyPattern) -> usize {
        match pattern {
            KeyPattern::Exact(key) => usize::from(self.delete(key)),
            KeyPattern::Wildcard(_) => {
                let matched: Vec<String> = self
                    .entries
                    .keys()
                    .filter(|key| pattern.matches(key))
                    .cloned()
                    .collect();

                matched.iter().filter(|key| self.delete(key)).count()
            }
        }
    }

    // == Clear ==
    /// Removes all entries. Returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.record_deletes(count);
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Swept entries count as evictions. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let count = before - self.entries.len();

        self.stats.record_evictions(count);
        count
    }

    // == Evict Oldest ==
    fn evict_oldest(&mut self) {
        let victims = oldest_keys(&self.entries, eviction_count(self.max_entries));

        for key in &victims {
            self.entries.remove(key);
        }
        self.stats.record_evictions(victims.len());

        debug!(
            evicted = victims.len(),
            max_entries = self.max_entries,
            "Cache full, evicted oldest entries"
        );
    }

    /// Returns true if `key` is stored and fresh. Does not touch statistics.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    /// Returns all stored keys, including expired entries not yet swept.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
