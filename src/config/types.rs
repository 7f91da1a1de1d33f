//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option can also be supplied through the environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_GEMINI_API_URL, DEFAULT_STATIC_DIR, SUMMARY_TIMEOUT_SECS,
    WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Server configuration.
///
/// Parsed from the command line (with environment fallbacks) by the binary,
/// or constructed programmatically through `Default`.
///
/// # Examples
///
/// ```no_run
/// use domain_osint::Config;
///
/// let config = Config {
///     gemini_api_key: Some("secret".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_osint",
    version,
    about = "Serves WHOIS-based domain analysis over HTTP"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "OSINT_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Directory containing the single-page application
    #[arg(long, env = "OSINT_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// API key for the generative-language API (summaries are skipped when unset)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Generative-language endpoint URL
    #[arg(long, env = "GEMINI_API_URL", default_value = DEFAULT_GEMINI_API_URL)]
    pub gemini_api_url: String,

    /// Timeout for the summary request in seconds
    #[arg(long, env = "OSINT_SUMMARY_TIMEOUT", default_value_t = SUMMARY_TIMEOUT_SECS)]
    pub summary_timeout_secs: u64,

    /// Timeout for the WHOIS lookup in seconds
    #[arg(long, env = "OSINT_WHOIS_TIMEOUT", default_value_t = WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_secs: u64,

    /// Log level
    #[arg(long, value_enum, env = "OSINT_LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, env = "OSINT_LOG_FORMAT", default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            gemini_api_key: None,
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            summary_timeout_secs: SUMMARY_TIMEOUT_SECS,
            whois_timeout_secs: WHOIS_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
