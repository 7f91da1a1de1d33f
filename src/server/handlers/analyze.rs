//! OSINT analysis handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use super::super::types::AppState;
use crate::analysis::{analyze_domain, domain_from_body, AnalysisResult};
use crate::error_handling::AnalysisError;

/// `POST /api/osint/analyze` with body `{"domain": "..."}`
///
/// The body is read raw so that a missing or malformed body gets the same
/// 400 answer as a missing `domain` key.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    let domain = domain_from_body(&body)?;
    let result = analyze_domain(&domain, state.whois.as_ref(), state.summarizer.as_ref()).await?;
    Ok(Json(result))
}
