//! API Module
//!
//! HTTP handlers and routing for the cache admin API.
//!
//! # Endpoints
//! - `PUT /cache`, `DELETE /cache`
//! - `GET /cache/:key`, `DELETE /cache/:key`
//! - `POST /invalidate/tags`, `POST /invalidate/patterns`
//! - `GET /stats`, `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
