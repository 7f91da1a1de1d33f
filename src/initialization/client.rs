//! HTTP client initialization.
//!
//! This module builds the HTTP client used for the summary API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, USER_AGENT};

/// Initializes the HTTP client for summary requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout from `summary_timeout_secs`
/// - A crate-specific User-Agent
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_summary_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.summary_timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
