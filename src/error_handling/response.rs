//! HTTP rendering of pipeline errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use super::types::AnalysisError;

/// Builds the `{"error": message}` body every failure response uses.
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

impl AnalysisError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::Validation(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Lookup(_) | AnalysisError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Analysis failed: {}", self);
        } else {
            log::debug!("Rejected analysis request: {}", self);
        }
        (status, Json(error_body(&self.to_string()))).into_response()
    }
}
