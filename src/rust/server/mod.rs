//! HTTP front end for the classifier.
//!
//! The classifier is built once before the listener is bound and shared with
//! every handler through [`SharedState`]; nothing in here mutates it.

mod error;
mod handlers;
mod middleware;
mod router;
mod state;

use std::future::Future;
use std::io;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use handlers::{ClassifyRequest, ClassifyResponse, HealthResponse, InfoResponse};
pub use router::build_router;
pub use state::{AppState, SharedState};

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: SharedState, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("Server running on {}", addr);
    }
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
