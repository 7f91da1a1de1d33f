//! Liveness and health handlers.

use axum::Json;
use chrono::Utc;

use super::super::types::{HealthResponse, TestResponse};
use crate::config::MSG_API_OK;

/// `GET /api/test`
pub async fn test_handler() -> Json<TestResponse> {
    Json(TestResponse {
        status: "success",
        message: MSG_API_OK,
    })
}

/// `GET /api/osint/health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}
