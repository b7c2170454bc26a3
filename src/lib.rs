//! Case Cache - in-memory query cache for the case-management service
//!
//! TTL expiration, tag and wildcard invalidation, creation-order eviction
//! and a compute-if-absent helper, with an HTTP admin API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{keys, CacheStats, CacheStore, Entity, SharedCache};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
