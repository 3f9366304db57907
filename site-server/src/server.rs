//! # Server Setup
//!
//! Tracing initialisation, router construction and the listen loop.

// region: --- Imports
use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};
// endregion: --- Imports

// region: --- Server Setup
/// Validate the configuration, then serve the bundle until the process stops.
///
/// # Errors
///
/// Returns an error if:
/// - The tracing subscriber cannot be installed
/// - The dist directory or its `index.html` is missing
/// - The bind address is unavailable
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level)?;

    info!("BOND OFFERING SITE SERVER STARTING");
    info!("Log level: {}", config.log_level);

    config.validate()?;
    info!("Serving from {}", config.dist_dir.display());

    let app = build_router(&config.dist_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!("SERVER READY: http://{}", config.bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| ServerError::Tracing(e.to_string()))
}

/// Router over `dist_dir`.
///
/// Existing files are served as-is; any other path gets `index.html` with a
/// 200 so the single-page app can render it.
pub fn build_router(dist_dir: &Path) -> Router {
    let index = ServeFile::new(dist_dir.join("index.html"));
    let bundle = ServeDir::new(dist_dir).fallback(index);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><html><body><div id=\"static-loader\"></div></body></html>";

    fn dist() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("site-web.js"), "export default function init() {}").unwrap();
        dir
    }

    async fn fetch(dist: &TempDir, uri: &str) -> (StatusCode, String) {
        let response = build_router(dist.path())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dist = dist();
        let (status, body) = fetch(&dist, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serves_asset() {
        let dist = dist();
        let (status, body) = fetch(&dist, "/site-web.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("init"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dist = dist();
        let (status, body) = fetch(&dist, "/offerings/barclays?market=eu").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_health() {
        let dist = dist();
        let (status, body) = fetch(&dist, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
