//! domain_osint library: WHOIS-based domain intelligence
//!
//! This library looks up a domain's public registration record, pulls the
//! contact details out of it (emails, names, phones, addresses, organizations),
//! asks a language model for a short security-oriented summary and serves the
//! whole thing over a small JSON API alongside a single-page web interface.
//!
//! # Example
//!
//! ```no_run
//! use domain_osint::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     bind: "127.0.0.1:8080".to_string(),
//!     ..Default::default()
//! };
//!
//! run_server(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod extract;
pub mod initialization;
pub mod server;
pub mod summary;
pub mod whois;

// Re-export public API
pub use analysis::{analyze_domain, AnalysisResult};
pub use config::{Config, LogFormat, LogLevel};
pub use server::{create_router, run_server, AppState};
