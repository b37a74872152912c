//! Per-request tracing span.
//!
//! Handlers log nothing themselves; this layer opens a `debug` span carrying a
//! UUID v4 request ID, method and path, and closes it with the response status
//! and latency. Under the default `info` filter nothing here is emitted.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Wraps the rest of the stack in a request span.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let span = tracing::debug_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::debug!(
            status = response.status().as_u16(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Response sent"
        );
    });

    response
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn layer_passes_response_through_unchanged() {
        let app = Router::new()
            .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }))
            .layer(axum::middleware::from_fn(request_span_layer));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move { axum::serve(listener, app).await });

        let response = reqwest::get(format!("http://{}/teapot", addr)).await.unwrap();
        assert_eq!(response.status().as_u16(), 418);
        assert_eq!(response.text().await.unwrap(), "short and stout");

        let missing = reqwest::get(format!("http://{}/missing", addr)).await.unwrap();
        assert_eq!(missing.status().as_u16(), 404);

        server.abort();
    }
}
