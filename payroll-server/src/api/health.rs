//! Liveness and health endpoints

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// GET / response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Payroll Analytics API running".to_string(),
    })
}

/// GET /api/health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current UTC time, RFC 3339
    pub timestamp: String,
    pub version: String,
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
