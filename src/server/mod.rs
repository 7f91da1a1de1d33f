//! HTTP server: JSON API plus the single-page application.
//!
//! Provides:
//! - `/api/test` - Liveness stub
//! - `/api/osint/analyze` - Domain analysis (POST)
//! - `/api/osint/health` - Health check with timestamp
//! - Everything else - Static files, falling back to `index.html`

mod handlers;
mod types;

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{Config, SPA_INDEX_FILE};
use crate::error_handling::{AnalysisError, InitializationError};
use crate::initialization::init_state;
use handlers::{analyze_handler, health_handler, test_handler};
pub use types::{AppState, HealthResponse, TestResponse};

/// Creates the application router.
///
/// Unmatched paths are served from `static_dir`; files that do not exist
/// resolve to its `index.html` with status 200 so client-side routing works.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join(SPA_INDEX_FILE)));

    let api_routes = Router::new()
        .route("/test", get(test_handler))
        .route("/osint/analyze", post(analyze_handler))
        .route("/osint/health", get(health_handler))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(spa)
        .layer(middleware::from_fn(log_requests))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

/// Runs the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the state cannot be built, the address cannot be
/// bound, or the server stops abnormally.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let state = init_state(config).context("Failed to initialize application state")?;

    let index = config.static_dir.join(SPA_INDEX_FILE);
    if !index.is_file() {
        log::warn!(
            "{} not found; the web interface will not be available",
            index.display()
        );
    }

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|source| InitializationError::BindError {
            addr: config.bind.clone(),
            source,
        })?;

    log::info!("Server listening on http://{}/", config.bind);
    log::info!("  - Analyze: POST http://{}/api/osint/analyze", config.bind);
    log::info!("  - Health: http://{}/api/osint/health", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({:.1}ms)",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    response
}

fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AnalysisError::Internal(detail).into_response()
}
