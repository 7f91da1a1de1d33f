//! Error handling for the analysis pipeline.
//!
//! This module provides:
//! - Error type definitions for each pipeline stage
//! - Mapping of pipeline errors to HTTP responses
//!
//! Errors are categorized into:
//! - **Validation**: client-fixable input problems (400)
//! - **Lookup**: WHOIS failures, surfaced verbatim (500)
//! - **Summary**: LLM failures, swallowed and replaced by a fallback text
//! - **Internal**: everything else (500)

mod response;
mod types;

// Re-export public API
pub use response::error_body;
pub use types::{AnalysisError, InitializationError, LookupError, SummaryError, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingDomain.to_string(),
            "Domínio não fornecido"
        );
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "Formato de domínio inválido"
        );
    }

    #[test]
    fn test_lookup_error_carries_cause() {
        let err = LookupError::Query("connection refused".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("Erro ao buscar WHOIS"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let resp = AnalysisError::from(ValidationError::MissingDomain).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AnalysisError::from(ValidationError::InvalidFormat).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_lookup_and_internal_map_to_server_error() {
        let resp = AnalysisError::from(LookupError::Timeout(10)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = AnalysisError::Internal("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_message_prefix() {
        let err = AnalysisError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "Erro interno: boom");
    }

    #[test]
    fn test_error_body_shape() {
        let body = error_body("x");
        assert_eq!(body, serde_json::json!({"error": "x"}));
    }
}
