//! Request dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed request (method, path)
//!     → route table lookup (exact match)
//!         hit  → invoke handler (isolated on its own task)
//!         miss → GET?      → static file resolver (200/404/500)
//!              → non-GET?  → 404
//! ```
//!
//! # Design Decisions
//! - Route precedence over static files, always
//! - Non-GET with no route is a 404, not a 405, matching the behavior the
//!   server's existing clients rely on
//! - Handler panics become a generic 500; the body never carries internal
//!   detail and the server keeps serving

pub mod dispatcher;

pub use dispatcher::Dispatcher;
