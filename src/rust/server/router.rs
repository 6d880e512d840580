//! Router construction.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use super::middleware::log_request;
use super::state::SharedState;

/// Build the complete router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // --- System ---
        .route("/", get(handlers::health))
        .route("/info", get(handlers::info))
        // --- Classification ---
        .route("/classify", post(handlers::classify))
        .route("/classify/", post(handlers::classify))
        .fallback(handlers::not_found)
        // --- Middleware ---
        .layer(axum::middleware::from_fn(log_request))
        .with_state(state)
}
