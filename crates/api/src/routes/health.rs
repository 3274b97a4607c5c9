use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which wallpaper source is configured.
    pub source: &'static str,
    /// Whether the source can currently serve a snapshot.
    pub source_healthy: bool,
}

/// GET /health -- returns service and data source health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let source_healthy = wallhub_db::health_check(state.source.as_ref()).await.is_ok();

    let status = if source_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        source: state.source.name(),
        source_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
