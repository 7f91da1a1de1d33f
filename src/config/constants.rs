//! Configuration constants.
//!
//! This module defines the defaults, timeouts and fixed response texts used
//! throughout the application.

/// Default listen address for the HTTP server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Default directory holding the single-page application
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Entry asset served for any path that does not match a static file
pub const SPA_INDEX_FILE: &str = "index.html";

/// Default generative-language endpoint (the API key is never defaulted)
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// LLM request timeout in seconds
pub const SUMMARY_TIMEOUT_SECS: u64 = 30;

/// WHOIS lookup timeout in seconds
/// Most WHOIS queries complete in <2s; slow registrar servers would
/// otherwise stall the request for the whois-service internal default (30s).
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent to the LLM API
pub const USER_AGENT: &str = concat!("domain_osint/", env!("CARGO_PKG_VERSION"));

// Response texts
pub const MSG_MISSING_DOMAIN: &str = "Domínio não fornecido";
pub const MSG_INVALID_DOMAIN_FORMAT: &str = "Formato de domínio inválido";
pub const MSG_API_OK: &str = "API está funcionando!";

/// Substituted for the LLM summary whenever it cannot be obtained
pub const SUMMARY_FALLBACK: &str = "Análise não disponível no momento.";

/// Appended to every successful analysis
pub const DISCLAIMER: &str =
    "Todas as informações foram coletadas de fontes públicas e não violam políticas de privacidade.";
