//! Shared Cache Module
//!
//! Cloneable, lock-protected handle around one `CacheStore`, plus the
//! compute-if-absent and invalidation helpers route code calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, KeyPattern};

// == Shared Cache ==
/// Thread-safe handle to a cache store.
///
/// Built once at start-up and handed to whatever needs it. Every method
/// holds the lock only for the duration of its own store operation.
#[derive(Debug)]
pub struct SharedCache<V> {
    inner: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> SharedCache<V> {
    pub fn new(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.write().await.get(key)
    }

    pub async fn set<I, S>(&self, key: impl Into<String>, value: V, ttl: Option<Duration>, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.write().await.set(key, value, ttl, tags);
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.write().await.delete(key)
    }

    pub async fn clear_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> usize {
        self.inner.write().await.clear_by_tags(tags)
    }

    pub async fn clear(&self) -> usize {
        self.inner.write().await.clear()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    // == With Cache ==
    /// Returns the cached value for `key`, or runs `producer` and caches its result.
    ///
    /// The lock is released while `producer` runs, so concurrent misses on the
    /// same key each run their own producer and the last write wins. A producer
    /// error is returned unchanged and nothing is stored.
    ///
    /// # Arguments
    /// * `key` - Cache key to read and fill
    /// * `producer` - Computation run on a miss
    /// * `ttl` - Lifetime of the stored result (default TTL if None)
    /// * `tags` - Labels attached to the stored result
    pub async fn with_cache<F, Fut, E, I, S>(
        &self,
        key: &str,
        producer: F,
        ttl: Option<Duration>,
        tags: I,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(cached) = self.get(key).await {
            debug!(key, "Cache hit");
            return Ok(cached);
        }

        debug!(key, "Cache miss, running producer");
        let value = producer().await?;
        self.set(key, value.clone(), ttl, tags).await;

        Ok(value)
    }

    // == Invalidate Cache ==
    /// Deletes exact keys and `*` wildcard patterns.
    ///
    /// Patterns that fail to compile are logged and skipped. Returns the
    /// number of entries removed.
    pub async fn invalidate_cache<S: AsRef<str>>(&self, patterns: &[S]) -> usize {
        let compiled: Vec<KeyPattern> = patterns
            .iter()
            .filter_map(|pattern| match KeyPattern::parse(pattern.as_ref()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("Skipping invalidation pattern: {}", e);
                    None
                }
            })
            .collect();

        self.invalidate_patterns(&compiled).await
    }

    // == Invalidate Patterns ==
    /// Deletes every key matched by one of the already parsed `patterns`.
    pub async fn invalidate_patterns(&self, patterns: &[KeyPattern]) -> usize {
        let mut store = self.inner.write().await;
        let removed: usize = patterns
            .iter()
            .map(|pattern| store.invalidate_matching(pattern))
            .sum();

        debug!(patterns = patterns.len(), removed, "Invalidated cache keys");
        removed
    }

    // == Invalidate Cache By Tags ==
    /// Drops every entry carrying one of `tags`. Returns the number removed.
    pub async fn invalidate_cache_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> usize {
        let removed = self.clear_by_tags(tags).await;
        debug!(tags = tags.len(), removed, "Invalidated cache tags");
        removed
    }
}
