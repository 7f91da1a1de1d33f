// Shared test helpers: fake collaborators and a live server over a temporary SPA directory.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::net::TcpListener;

use domain_osint::error_handling::{LookupError, SummaryError};
use domain_osint::summary::{Summarizer, SummaryPayload};
use domain_osint::whois::{WhoisRecord, WhoisSource, WhoisValue};
use domain_osint::{create_router, AppState};

pub const INDEX_HTML: &str = "<!doctype html><title>OSINT</title><div id=\"app\"></div>";

/// WHOIS source that answers every lookup with the same record, or fails.
pub struct FakeWhois {
    pub result: Result<WhoisRecord, LookupError>,
    pub calls: AtomicUsize,
}

impl FakeWhois {
    pub fn ok(record: WhoisRecord) -> Self {
        Self {
            result: Ok(record),
            calls: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)] // Used by other test files
    pub fn failing(err: LookupError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WhoisSource for FakeWhois {
    async fn lookup(&self, _domain: &str) -> Result<WhoisRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Summarizer returning a fixed text, or failing when `text` is `None`.
pub struct FakeSummarizer {
    pub text: Option<String>,
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, payload: &SummaryPayload<'_>) -> Result<String, SummaryError> {
        match &self.text {
            Some(text) => Ok(format!("{} ({})", text, payload.domain)),
            None => Err(SummaryError::Status(503)),
        }
    }
}

/// A record resembling what a registry returns for `example.com`.
pub fn sample_record() -> WhoisRecord {
    let mut record = WhoisRecord::new();
    record.insert("domain_name".to_string(), WhoisValue::from("EXAMPLE.COM"));
    record.insert("registrar".to_string(), WhoisValue::from("Example Registrar, Inc."));
    record.insert(
        "name_servers".to_string(),
        WhoisValue::List(vec!["a.iana-servers.net".to_string(), "b.iana-servers.net".to_string()]),
    );
    record.insert("registrant_name".to_string(), WhoisValue::from("Jane Roe"));
    record.insert(
        "registrant_email".to_string(),
        WhoisValue::from("hostmaster@example.com"),
    );
    record.insert(
        "admin_email".to_string(),
        WhoisValue::from("hostmaster@example.com"),
    );
    record.insert(
        "registrant_phone".to_string(),
        WhoisValue::from("+1 555 123 4567"),
    );
    record.insert("registrant_city".to_string(), WhoisValue::from("Los Angeles"));
    record.insert("org".to_string(), WhoisValue::from("Example Org"));
    record
}

/// A running server; the static directory lives as long as this value.
pub struct TestServer {
    pub url: String,
    pub dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn analyze(&self, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/osint/analyze", self.url))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.url, path))
            .send()
            .await
            .expect("Request failed")
    }
}

/// Serves the full router on an ephemeral port. The static directory holds a
/// single `index.html`.
pub async fn start_app(whois: Arc<FakeWhois>, summary: Option<&str>) -> TestServer {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");

    let summarizer = Arc::new(FakeSummarizer {
        text: summary.map(str::to_string),
    });
    let app = create_router(AppState::new(whois, summarizer), dir.path());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build client");

    TestServer {
        url: format!("http://{}", addr),
        dir,
        client,
    }
}
