//! Health check endpoints for container orchestration.
//!
//! Both probes succeed unconditionally while the process can answer HTTP.
//! Readiness evaluates no dependencies, because the server has none.

/// Liveness probe body
pub const HEALTH_BODY: &str = "OK\n";

/// Readiness probe body
pub const READINESS_BODY: &str = "Ready\n";

/// Liveness probe handler.
pub async fn health() -> &'static str {
    HEALTH_BODY
}

/// Readiness probe handler.
pub async fn readiness() -> &'static str {
    READINESS_BODY
}
