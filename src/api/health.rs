//! Health check endpoint.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::is_secure;
use crate::http::AppState;

/// Health check response with server clock and transport metadata.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub https: bool,
}

impl HealthStatus {
    /// Snapshot of a healthy server at the current instant.
    pub fn ok(environment: &str, https: bool) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            environment: environment.to_string(),
            https,
        }
    }
}

/// `GET /api/health`
///
/// Always succeeds barring process failure. Reports the deployment
/// environment label and whether the request arrived over TLS.
pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> Json<HealthStatus> {
    Json(HealthStatus::ok(&state.environment, is_secure(&headers)))
}
