//! Eviction Module
//!
//! Chooses which entries to drop when the store is full.
//!
//! The policy is first-in-first-out by creation time: the entries with the
//! smallest `created_at` go first, regardless of how recently they were read.

use std::collections::HashMap;

use crate::cache::CacheEntry;

/// Share of capacity freed by one eviction pass.
pub const EVICTION_FRACTION: f64 = 0.1;

// == Eviction Count ==
/// Number of entries one eviction pass removes for a store of `max_entries`.
///
/// `floor(max_entries * 0.1)`, never less than one.
pub fn eviction_count(max_entries: usize) -> usize {
    ((max_entries as f64 * EVICTION_FRACTION).floor() as usize).max(1)
}

// == Oldest Keys ==
/// Returns up to `count` keys ordered oldest first by `(created_at, sequence)`.
pub fn oldest_keys<V>(entries: &HashMap<String, CacheEntry<V>>, count: usize) -> Vec<String> {
    let mut order: Vec<(u64, u64, &String)> = entries
        .iter()
        .map(|(key, entry)| (entry.created_at, entry.sequence, key))
        .collect();
    order.sort_unstable();

    order
        .into_iter()
        .take(count)
        .map(|(_, _, key)| key.clone())
        .collect()
}
