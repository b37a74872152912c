//! Top-level error type for process startup.

use crate::config::ConfigError;
use crate::http::ServerError;

/// Anything that can stop the server from starting or keep running.
///
/// Request handling itself is infallible; every variant here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
