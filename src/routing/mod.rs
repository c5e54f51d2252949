//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → table.rs (exact (path, method) lookup)
//!     → Return: matched handler or None
//!
//! Registration (any time):
//!     add(path, method, handler)
//!     → Overwrite on collision (last writer wins)
//! ```
//!
//! # Design Decisions
//! - Exact string match on path (case-sensitive), no wildcards or parameters
//! - Methods are `http::Method`, so matching is canonical uppercase
//! - Shared-read / exclusive-write via RwLock: lookups run concurrently on
//!   request tasks, registration is allowed while the server runs
//! - Deterministic: same (path, method) always yields the same handler

pub mod handler;
pub mod table;

pub use handler::{BoxedHandler, HandlerResponse};
pub use table::RouteTable;
