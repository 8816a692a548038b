//! HTTP API for Rankboard.
//!
//! Thin JSON adapter over [`rankboard_store::Registry`]. Handlers validate
//! and translate requests, call the store, and map store errors to status
//! codes; no ranking logic lives here.

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use rankboard_store::Registry;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

pub mod api;
mod error;
mod handlers;
mod shutdown;

pub use error::ApiError;
pub use handlers::MAX_SEED_COUNT;
pub use shutdown::{with_drain_deadline, SHUTDOWN_GRACE};

/// CORS policy for browser clients: any origin, no credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([HeaderName::from_static("origin"), header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(12 * 60 * 60))
}

/// Build the HTTP API router over a shared registry.
pub fn build_router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/seed", post(handlers::seed))
        .route("/api/leaderboard", get(handlers::leaderboard))
        .route("/api/users/{username}", get(handlers::user_rank))
        .route("/api/users/{username}/score", post(handlers::update_score))
        .route("/api/search", get(handlers::search))
        .route("/api/stats", get(handlers::stats))
        .layer(cors_layer())
        .with_state(registry)
}
