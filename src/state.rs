//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::BuildInfo;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds only read-only data, so concurrent requests never contend on it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub build: Arc<BuildInfo>,
}

impl AppState {
    /// Creates a new application state from the given build metadata.
    pub fn new(build: BuildInfo) -> Self {
        Self {
            build: Arc::new(build),
        }
    }
}
