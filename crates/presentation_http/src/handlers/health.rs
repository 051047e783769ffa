//! Root and health check handlers

use axum::Json;
use serde::{Deserialize, Serialize};

/// Root response when no frontend is bundled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// `GET /` without a static frontend
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "CleanSky backend running".to_string(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
