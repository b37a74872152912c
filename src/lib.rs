//! hello-server: a minimal HTTP server.
//!
//! Serves a greeting, liveness and readiness probes, and a build-info report.
//! All handlers are pure functions of the build metadata in [`state::AppState`].

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::Error;
