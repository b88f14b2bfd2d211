// src/routes/health.rs
//! Liveness probe for the sensor API scaffold.
//!
//! Orchestrators and monitors poll `GET /health` to learn that the process is
//! up and accepting connections. The answer never varies: request content is
//! not inspected and nothing outside this module is consulted.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body served on `/health`. Serializes to exactly `{"status":"ok"}`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

impl HealthStatus {
    pub const OK: HealthStatus = HealthStatus { status: "ok" };
}

/// Handle `GET /health`.
///
/// `Json` sets `Content-Type: application/json` and the status defaults to 200.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::OK)
}

/// Sub-router holding the single `GET /health` route, generic over the
/// gateway's state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
