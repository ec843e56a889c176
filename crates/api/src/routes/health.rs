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
    /// Whether the template data directory is reachable.
    pub data_dir_reachable: bool,
}

/// GET /health -- returns service and data-directory health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data_dir_reachable = tokio::fs::metadata(state.store.data_dir()).await.is_ok();

    // A missing data directory is a degraded (empty catalog) state, not an
    // outage: the loader serves empty lists either way.
    let status = if data_dir_reachable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        data_dir_reachable,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
