//! Error type definitions.
//!
//! This module defines the error types for every stage of the analysis
//! pipeline plus startup.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::{MSG_INVALID_DOMAIN_FORMAT, MSG_MISSING_DOMAIN};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the listening socket.
    #[error("Failed to bind server to {addr}: {source}")]
    BindError {
        /// Address the server tried to bind
        addr: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Request input the client can fix. Rendered as HTTP 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body missing, not JSON, or without a usable `domain` string.
    #[error("{msg}", msg = MSG_MISSING_DOMAIN)]
    MissingDomain,

    /// Normalized domain does not look like `label.tld`.
    #[error("{msg}", msg = MSG_INVALID_DOMAIN_FORMAT)]
    InvalidFormat,
}

/// WHOIS lookup failure. Rendered as HTTP 500 with the message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The WHOIS client could not be constructed.
    #[error("Erro ao buscar WHOIS: {0}")]
    Client(String),

    /// The query itself failed.
    #[error("Erro ao buscar WHOIS: {0}")]
    Query(String),

    /// The server answered but nothing usable came back.
    #[error("Erro ao buscar WHOIS: no data returned for {0}")]
    NoData(String),

    /// The lookup did not finish within the configured bound.
    #[error("Erro ao buscar WHOIS: lookup timed out after {0}s")]
    Timeout(u64),
}

/// Why no LLM summary is available. Never surfaced to the HTTP client.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// No API key configured, so no request was sent.
    #[error("summary API key not configured")]
    NotConfigured,

    /// Connection failure, timeout or similar.
    #[error("summary request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The API answered with something other than 200.
    #[error("summary API returned HTTP {0}")]
    Status(u16),

    /// 200 but the candidate list was missing or empty.
    #[error("summary API returned no candidates")]
    NoCandidates,

    /// The body could not be decoded or the first candidate had no text.
    #[error("summary API returned a malformed response: {0}")]
    Malformed(String),
}

/// Any failure that ends an analysis request.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Bad or missing input (HTTP 400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// WHOIS failure (HTTP 500)
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Anything else (HTTP 500)
    #[error("Erro interno: {0}")]
    Internal(String),
}
