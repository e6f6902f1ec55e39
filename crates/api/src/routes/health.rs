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
    /// Whether the data file is readable and well-formed.
    pub store_healthy: bool,
    /// Number of stored characters (0 when the store is unhealthy).
    pub records: usize,
}

/// GET /health -- returns service and data file health.
///
/// A corrupt data file keeps the API up (reads degrade to an empty list)
/// but is reported here as `degraded`.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let checked = charcat_db::health_check(&state.store).await;
    if let Err(err) = &checked {
        tracing::warn!(error = %err, "Store health check failed");
    }

    let store_healthy = checked.is_ok();
    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        records: checked.unwrap_or(0),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
