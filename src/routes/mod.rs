//! HTTP route handlers.
//!
//! The route table is built explicitly by [`create_router`] and handed to the
//! server; nothing is registered globally. Paths match exactly and every
//! route accepts any method. Unknown paths get axum's default empty 404.
//!
//! Every request runs inside a `debug` span tagged with a fresh request ID.

pub mod health;
pub mod home;
pub mod version;

use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    middleware,
    routing::any,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Probe and build-info responses must never be served from a cache.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let greeting_routes = Router::new().route("/", any(home::index));

    // Probes and version - always fresh
    let probe_routes = Router::new()
        .route("/health", any(health::health))
        .route("/readiness", any(health::readiness))
        .route("/version", any(version::version))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(greeting_routes)
        .merge(probe_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_span_layer))
}
