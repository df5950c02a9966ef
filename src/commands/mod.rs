//! HTTP surface for the cost report.
//!
//! - `GET /` redirects to `/app/`
//! - `GET /app/` serves the report page (`?format=text|json|html`)
//! - `GET /api/scenarios`, `GET /api/config`, `GET /health`

mod report;

use std::net::SocketAddr;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::core::AppState;
use crate::utils::EstimatorResult;

pub use report::*;

/// Builds the report router over shared read-only state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_app))
        .route("/app", get(report))
        .route("/app/", get(report))
        .route("/api/scenarios", get(scenarios))
        .route("/api/config", get(config))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds `addr` and serves the report until the process exits.
pub async fn serve(state: AppState, addr: SocketAddr) -> EstimatorResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Report server listening on http://{}/app/", addr);
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
