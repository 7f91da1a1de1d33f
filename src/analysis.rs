//! The domain analysis pipeline.
//!
//! validate → normalize → WHOIS → extract → summarize → assemble.
//! Validation and lookup failures stop the pipeline; summary failures are
//! replaced by a fallback text.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{DISCLAIMER, SUMMARY_FALLBACK};
use crate::domain::{clean_domain, is_valid_domain};
use crate::error_handling::{AnalysisError, ValidationError};
use crate::extract::{extract_info, ExtractedInfo};
use crate::summary::{Summarizer, SummaryPayload};
use crate::whois::{WhoisRecord, WhoisSource};

/// Successful analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub domain: String,
    pub timestamp: String,
    pub whois_data: WhoisRecord,
    pub extracted_info: ExtractedInfo,
    pub gemini_analysis: String,
    pub disclaimer: String,
}

/// Pulls the `domain` string out of a raw request body.
///
/// A missing or non-JSON body, a missing key, a non-string value and an empty
/// string are all reported as [`ValidationError::MissingDomain`].
pub fn domain_from_body(body: &[u8]) -> Result<String, ValidationError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| ValidationError::MissingDomain)?;

    match value.get("domain") {
        Some(Value::String(domain)) if !domain.is_empty() => Ok(domain.clone()),
        _ => Err(ValidationError::MissingDomain),
    }
}

/// Runs the full analysis for a user-supplied domain or URL.
///
/// # Errors
///
/// - [`AnalysisError::Validation`] if the cleaned domain is malformed
/// - [`AnalysisError::Lookup`] if the WHOIS lookup fails
/// - [`AnalysisError::Internal`] if the result cannot be assembled
pub async fn analyze_domain(
    input: &str,
    whois: &dyn WhoisSource,
    summarizer: &dyn Summarizer,
) -> Result<AnalysisResult, AnalysisError> {
    if input.is_empty() {
        return Err(ValidationError::MissingDomain.into());
    }

    let domain = clean_domain(input);
    if !is_valid_domain(&domain) {
        return Err(ValidationError::InvalidFormat.into());
    }

    log::info!("Starting OSINT analysis for: {}", domain);

    let whois_data = whois.lookup(&domain).await?;
    let extracted_info = extract_info(&whois_data);

    let payload = SummaryPayload {
        domain: &domain,
        whois_data: &whois_data,
        extracted_info: &extracted_info,
    };
    let gemini_analysis = match summarizer.summarize(&payload).await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Summary unavailable for {}: {}", domain, e);
            SUMMARY_FALLBACK.to_string()
        }
    };

    log::info!("Analysis finished for: {}", domain);

    Ok(AnalysisResult {
        domain,
        timestamp: Utc::now().to_rfc3339(),
        whois_data,
        extracted_info,
        gemini_analysis,
        disclaimer: DISCLAIMER.to_string(),
    })
}
