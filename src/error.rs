//! Public error taxonomy for the server.
//!
//! # Design Decisions
//! - Only lifecycle-level failures are public errors; per-request failures
//!   (missing file, handler panic) are converted to HTTP status codes inside
//!   the dispatcher and never surface here
//! - Bind failures propagate to the `start` caller; accept failures are
//!   reported on the error channel without stopping the loop

use thiserror::Error;

/// Errors surfaced by the server lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening port could not be bound (in use, insufficient privilege).
    #[error("failed to bind port: {0}")]
    Bind(#[source] std::io::Error),

    /// Configuration mutation attempted while the server is running.
    #[error("configuration is locked while the server is running")]
    Locked,

    /// The accept loop failed to accept a connection.
    ///
    /// Never returned from `start`/`stop`; delivered via [`Server::take_error`]
    /// only, the loop itself keeps running.
    ///
    /// [`Server::take_error`]: crate::server::Server::take_error
    #[error("failed to accept connection: {0}")]
    Accept(#[source] std::io::Error),
}
