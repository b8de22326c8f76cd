//! Static file server for the studio front end.
//!
//! Serves the Trunk `dist/` directory with a fallback to `index.html` so
//! client-side routes survive a reload, and serves translation bundles
//! under `/locales/{lng}/translation.json`. Unknown locale files are a
//! plain 404 so the client falls back to its embedded bundle.

pub mod config;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

pub use config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server on {addr} stopped: {source}")]
    Serve {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Build the router for `cfg`.
pub fn router(cfg: &ServerConfig) -> Router {
    let index = cfg.dist_dir.join("index.html");
    let spa = ServeDir::new(&cfg.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .nest_service("/locales", ServeDir::new(&cfg.locales_dir))
        .fallback_service(spa)
        .layer(axum::middleware::from_fn(wf_telemetry::middleware::access_log))
        .layer(CompressionLayer::new())
}

/// Bind and serve until ctrl-c.
pub async fn serve(cfg: ServerConfig) -> Result<(), ServerError> {
    let addr = cfg.bind_addr()?;
    if !cfg.dist_dir.join("index.html").exists() {
        tracing::warn!(dist_dir = %cfg.dist_dir.display(), "index.html not found; run `trunk build` first");
    }

    let app = router(&cfg);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, dist_dir = %cfg.dist_dir.display(), "studio listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { addr, source })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    info!("ctrl-c received, shutting down");
}
