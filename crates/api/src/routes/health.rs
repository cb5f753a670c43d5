use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
}

/// GET / -- liveness probe.
///
/// Touches neither the store nor the mailer; a reachable process answers
/// `{"status":"ok"}` unconditionally.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Mount the health check at the root path.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}
