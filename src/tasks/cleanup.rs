//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//! Lookups already skip expired entries; the sweep only bounds memory held
//! by entries nobody reads again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// sweeps. Each sweep takes the write lock once. Swept entries count as
/// evictions in the cache statistics.
///
/// # Returns
/// A JoinHandle for the spawned task; aborting it stops the sweep.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(CacheStore::new(1000, Duration::from_secs(300)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: SharedCache<V>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting expiry sweep with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
