//! Generative-language API wire types and the summary payload.

use serde::{Deserialize, Serialize};

use crate::error_handling::SummaryError;
use crate::extract::ExtractedInfo;
use crate::whois::WhoisRecord;

/// Everything the summary is asked about.
#[derive(Debug, Serialize)]
pub struct SummaryPayload<'a> {
    pub domain: &'a str,
    pub whois_data: &'a WhoisRecord,
    pub extracted_info: &'a ExtractedInfo,
}

/// `{"contents":[{"parts":[{"text": prompt}]}]}`
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub(crate) contents: Vec<Content>,
}

impl GenerateRequest {
    pub(crate) fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub(crate) parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<String>,
}

/// `{"candidates":[{"content":{"parts":[{"text": answer}]}}]}`
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub(crate) content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    pub(crate) fn into_first_text(self) -> Result<String, SummaryError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(SummaryError::NoCandidates)?;

        candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| SummaryError::Malformed("first candidate has no text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope() {
        let json = serde_json::to_value(GenerateRequest::from_prompt("hi".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_first_text() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"one"},{"text":"two"}]}},{"content":{"parts":[{"text":"other"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.into_first_text().unwrap(), "one");
    }

    #[test]
    fn test_no_candidates() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(matches!(
            resp.into_first_text(),
            Err(SummaryError::NoCandidates)
        ));

        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            resp.into_first_text(),
            Err(SummaryError::NoCandidates)
        ));
    }

    #[test]
    fn test_candidate_without_text() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(matches!(
            resp.into_first_text(),
            Err(SummaryError::Malformed(_))
        ));
    }
}
