//! WHOIS domain lookup using the whois-service crate.
//!
//! The lookup is exposed through the [`WhoisSource`] trait so the request
//! handler can be driven by any source; [`ServiceWhoisSource`] is the network
//! implementation.

mod parse;
mod raw;
mod types;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use whois_service::WhoisClient;

use crate::error_handling::LookupError;

pub use types::{WhoisRecord, WhoisValue};

/// Something that can fetch a WHOIS record for a cleaned domain.
#[async_trait]
pub trait WhoisSource: Send + Sync {
    /// Looks up `domain`, returning every non-empty field of the record.
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, LookupError>;
}

/// WHOIS lookups over the network via `whois_service::WhoisClient`.
///
/// Each lookup is bounded by `timeout`; the client's own internal timeout is
/// much longer.
#[derive(Debug, Clone)]
pub struct ServiceWhoisSource {
    timeout: Duration,
}

impl ServiceWhoisSource {
    /// Creates a source whose lookups give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn lookup_unbounded(&self, domain: &str) -> Result<WhoisRecord, LookupError> {
        // whois-service client is lightweight, create one per lookup
        let client = WhoisClient::new()
            .await
            .map_err(|e| LookupError::Client(e.to_string()))?;

        let response = client
            .lookup(domain)
            .await
            .map_err(|e| LookupError::Query(e.to_string()))?;

        let record = parse::convert_response(&response);
        if parse::is_unregistered(&record, &response.raw_data) {
            return Err(LookupError::NoData(domain.to_string()));
        }

        Ok(record)
    }
}

/// Runs `lookup`, giving up with [`LookupError::Timeout`] after `timeout`.
async fn bounded<F>(timeout: Duration, lookup: F) -> Result<WhoisRecord, LookupError>
where
    F: Future<Output = Result<WhoisRecord, LookupError>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout(timeout.as_secs())),
    }
}

#[async_trait]
impl WhoisSource for ServiceWhoisSource {
    async fn lookup(&self, domain: &str) -> Result<WhoisRecord, LookupError> {
        log::info!("Starting WHOIS lookup for domain: {}", domain);

        let result = bounded(self.timeout, self.lookup_unbounded(domain)).await;

        match &result {
            Ok(record) => log::info!(
                "WHOIS lookup successful for {} ({} fields)",
                domain,
                record.len()
            ),
            Err(e) => log::warn!("WHOIS lookup failed for {}: {}", domain, e),
        }

        result
    }
}
