//! Natural-language summary of an analysis via a generative-language API.
//!
//! The request handler talks to a [`Summarizer`]; [`GeminiClient`] is the
//! HTTP implementation. Failures come back as [`SummaryError`] and are never
//! fatal to the request.

mod types;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error_handling::SummaryError;

pub use types::SummaryPayload;
use types::{GenerateRequest, GenerateResponse};

/// Produces a free-text summary of an analysis payload.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `payload`, or explains why no summary is available.
    async fn summarize(&self, payload: &SummaryPayload<'_>) -> Result<String, SummaryError>;
}

/// Builds the fixed analysis prompt around the pretty-printed payload.
pub fn build_prompt(payload: &SummaryPayload<'_>) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string_pretty(payload)?;
    Ok(format!(
        r#"
Analise os seguintes dados OSINT coletados de forma pública e legal:

{data}

Forneça uma análise profissional incluindo:
1. Resumo dos dados encontrados
2. Possíveis conexões entre as informações
3. Recomendações de segurança
4. Observações sobre a exposição de dados

Mantenha um tom profissional e ético, lembrando que todos os dados são públicos.
"#
    ))
}

/// Client for the `generateContent` endpoint.
///
/// The API key travels as the `key` query parameter. Without a key no request
/// is made and every call returns [`SummaryError::NotConfigured`].
#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<reqwest::Client>,
    api_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Creates a client; the request timeout comes from `client`.
    pub fn new(client: Arc<reqwest::Client>, api_url: String, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// True when an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, payload: &SummaryPayload<'_>) -> Result<String, SummaryError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SummaryError::NotConfigured);
        };

        let prompt = build_prompt(payload).map_err(|e| SummaryError::Malformed(e.to_string()))?;

        log::debug!("Requesting summary for {}", payload.domain);
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            // The request URL carries the API key
            .map_err(|e| SummaryError::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SummaryError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SummaryError::Malformed(e.without_url().to_string()))?;

        body.into_first_text()
    }
}
