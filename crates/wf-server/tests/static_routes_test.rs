//! Router behaviour against a throwaway dist/ and locales/ tree.

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;
use wf_server::{router, ServerConfig};

const INDEX: &str = "<!DOCTYPE html><html><body>studio</body></html>";
const EN: &str = r#"{"app":{"name":"AI Workflow Studio"}}"#;

fn fixture() -> (TempDir, ServerConfig) {
    let root = tempfile::tempdir().unwrap();
    let dist = root.path().join("dist");
    let locales = root.path().join("locales");
    fs::create_dir_all(&dist).unwrap();
    fs::create_dir_all(locales.join("en")).unwrap();
    fs::write(dist.join("index.html"), INDEX).unwrap();
    fs::write(dist.join("app.js"), "console.log('app')").unwrap();
    fs::write(locales.join("en").join("translation.json"), EN).unwrap();

    let cfg = ServerConfig {
        dist_dir: dist,
        locales_dir: locales,
        ..ServerConfig::default()
    };
    (root, cfg)
}

async fn get(cfg: &ServerConfig, uri: &str) -> (StatusCode, Option<String>, String) {
    let res = router(cfg)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

// ===========================================================================
// SPA fallback
// ===========================================================================

#[tokio::test]
async fn test_root_serves_index() {
    let (_dir, cfg) = fixture();
    let (status, _, body) = get(&cfg, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let (_dir, cfg) = fixture();
    for uri in ["/dashboard", "/runs-logs", "/builder/flow/1", "/no-such-page"] {
        let (status, ctype, body) = get(&cfg, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(ctype.unwrap_or_default().starts_with("text/html"), "{uri}");
        assert_eq!(body, INDEX, "{uri}");
    }
}

#[tokio::test]
async fn test_assets_are_served_as_files() {
    let (_dir, cfg) = fixture();
    let (status, ctype, body) = get(&cfg, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ctype.unwrap_or_default().contains("javascript"));
    assert_eq!(body, "console.log('app')");
}

// ===========================================================================
// Locale bundles
// ===========================================================================

#[tokio::test]
async fn test_locale_bundle_is_json() {
    let (_dir, cfg) = fixture();
    let (status, ctype, body) = get(&cfg, "/locales/en/translation.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ctype.unwrap_or_default().starts_with("application/json"));
    assert_eq!(body, EN);
}

#[tokio::test]
async fn test_unknown_locale_is_not_found() {
    let (_dir, cfg) = fixture();
    let (status, _, body) = get(&cfg, "/locales/fr/translation.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, INDEX);
}

// ===========================================================================
// Errors
// ===========================================================================

#[tokio::test]
async fn test_occupied_port_is_a_bind_error() {
    let (_dir, mut cfg) = fixture();
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    cfg.bind = taken.local_addr().unwrap().to_string();

    let err = wf_server::serve(cfg).await.unwrap_err();
    assert!(matches!(err, wf_server::ServerError::Bind { .. }), "got {err}");
}

#[test]
fn test_runtime_failure_is_reported_as_serve_error() {
    let err = wf_server::ServerError::Serve {
        addr: "127.0.0.1:8080".parse().unwrap(),
        source: std::io::Error::other("accept failed"),
    };
    assert_eq!(err.to_string(), "server on 127.0.0.1:8080 stopped: accept failed");
    assert!(std::error::Error::source(&err).is_some());
}
