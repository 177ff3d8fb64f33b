//! Liveness endpoints.

use axum::Json;
use serde::Serialize;

use crate::config::{APP_NAME, APP_VERSION};

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
    pub version: &'static str,
    pub timestamp: String,
}

/// `GET /`: plain-text banner.
pub async fn banner() -> String {
    format!("{APP_NAME} Backend is running!")
}

/// `GET /api/health`: health check for monitoring.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: format!("{APP_NAME} triage service is alive"),
        version: APP_VERSION,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
