//! Shared server state and fixed response bodies.

use std::sync::Arc;

use serde::Serialize;

use crate::summary::Summarizer;
use crate::whois::WhoisSource;

/// State shared by all request handlers.
///
/// Immutable; cloning only bumps the reference counts.
#[derive(Clone)]
pub struct AppState {
    pub whois: Arc<dyn WhoisSource>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// Creates the state from a WHOIS source and a summarizer.
    pub fn new(whois: Arc<dyn WhoisSource>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { whois, summarizer }
    }
}

/// `GET /api/test` body
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /api/osint/health` body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
