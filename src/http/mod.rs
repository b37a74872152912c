//! HTTP server module.
//!
//! Binds the listener and runs the router built by [`crate::routes`].
//! Bind failure is the only startup error; callers treat it as fatal.

mod server;

pub use server::{bind, serve, start_server, ServerError};
