use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Axum middleware that logs one `access` event per request with the
/// method, path, status and latency in milliseconds. Server errors are
/// logged at `warn`.
pub async fn access_log(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(target: "access", %method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::debug!(target: "access", %method, %path, status = status.as_u16(), elapsed_ms, "request");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn passes_response_through() {
        let app = Router::new()
            .route("/ok", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(access_log));

        let res = app
            .oneshot(Request::builder().uri("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
