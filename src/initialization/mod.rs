//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client for the summary API
//! - Application state (WHOIS source and summarizer)

mod client;
mod logger;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::server::AppState;
use crate::summary::GeminiClient;
use crate::whois::ServiceWhoisSource;

// Re-export public API
pub use client::init_summary_client;
pub use logger::init_logger_with;

/// Builds the production application state from `config`.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
pub fn init_state(config: &Config) -> Result<AppState, InitializationError> {
    let client = init_summary_client(config)?;
    let summarizer = GeminiClient::new(
        client,
        config.gemini_api_url.clone(),
        config.gemini_api_key.clone(),
    );
    if !summarizer.is_configured() {
        log::warn!("GEMINI_API_KEY not set; analyses will carry the fallback summary");
    }

    let whois = ServiceWhoisSource::new(Duration::from_secs(config.whois_timeout_secs));

    Ok(AppState::new(Arc::new(whois), Arc::new(summarizer)))
}
