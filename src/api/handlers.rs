//! API Handlers
//!
//! HTTP request handlers for each cache admin endpoint.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{CacheStore, KeyPattern, SharedCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    requests::validate_key, DeleteResponse, GetResponse, HealthResponse,
    InvalidatePatternsRequest, InvalidateResponse, InvalidateTagsRequest, SetRequest,
    SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache of JSON values
    pub cache: SharedCache<Value>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(store: CacheStore<Value>) -> Self {
        Self {
            cache: SharedCache::new(store),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.max_entries, config.default_ttl()))
    }
}

/// Handler for PUT /cache
///
/// Stores a JSON value with optional TTL and tags.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl_ms.map(Duration::from_millis);
    state
        .cache
        .set(req.key.clone(), req.value, ttl, req.tags)
        .await;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /cache/:key
///
/// Misses (absent or expired) map to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    if let Some(error_msg) = validate_key(&key) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    match state.cache.get(&key).await {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /cache/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if let Some(error_msg) = validate_key(&key) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    if state.cache.delete(&key).await {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(key))
    }
}

/// Handler for DELETE /cache
///
/// Drops every entry.
pub async fn clear_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let removed = state.cache.clear().await;
    info!("Cache cleared: {} entries removed", removed);

    Json(InvalidateResponse { removed })
}

/// Handler for POST /invalidate/tags
pub async fn invalidate_tags_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateTagsRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let removed = state.cache.invalidate_cache_by_tags(&req.tags).await;
    info!(tags = ?req.tags, removed, "Tag invalidation");

    Ok(Json(InvalidateResponse { removed }))
}

/// Handler for POST /invalidate/patterns
///
/// Every pattern is parsed before anything is removed; one bad pattern
/// rejects the whole request with 400.
pub async fn invalidate_patterns_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidatePatternsRequest>,
) -> Result<Json<InvalidateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let patterns = req
        .patterns
        .iter()
        .map(|pattern| KeyPattern::parse(pattern))
        .collect::<Result<Vec<_>>>()?;

    let removed = state.cache.invalidate_patterns(&patterns).await;
    info!(patterns = ?req.patterns, removed, "Pattern invalidation");

    Ok(Json(InvalidateResponse { removed }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
