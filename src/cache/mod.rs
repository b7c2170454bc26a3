//! Cache Module
//!
//! Provides in-memory caching with TTL expiration, tag-based invalidation
//! and creation-order eviction.

mod clock;
mod entry;
mod eviction;
pub mod keys;
mod pattern;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, duration_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use eviction::{eviction_count, EVICTION_FRACTION};
pub use keys::Entity;
pub use pattern::{KeyPattern, WILDCARD};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes, enforced at the HTTP boundary
pub const MAX_KEY_LENGTH: usize = 256;

/// Default entry lifetime: 5 minutes
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Default capacity
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Empty tag list for untagged entries
pub const NO_TAGS: [&str; 0] = [];
