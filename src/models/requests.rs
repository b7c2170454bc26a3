//! Request DTOs for the cache admin API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;

/// Request body for the SET operation (PUT /cache)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON value
/// - `ttl_ms`: Optional TTL in milliseconds (uses default if not specified)
/// - `tags`: Optional invalidation tags
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub ttl_ms: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Checks a key against the API's key rules.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

/// Request body for POST /invalidate/tags
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateTagsRequest {
    pub tags: Vec<String>,
}

impl InvalidateTagsRequest {
    pub fn validate(&self) -> Option<String> {
        if self.tags.is_empty() {
            return Some("At least one tag is required".to_string());
        }
        None
    }
}

/// Request body for POST /invalidate/patterns
///
/// Each pattern is an exact key, or contains `*` wildcards. Patterns are
/// parsed by the handler, so only the list itself is checked here.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidatePatternsRequest {
    pub patterns: Vec<String>,
}

impl InvalidatePatternsRequest {
    pub fn validate(&self) -> Option<String> {
        if self.patterns.is_empty() {
            return Some("At least one pattern is required".to_string());
        }
        None
    }
}
