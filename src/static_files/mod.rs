//! Static file serving subsystem.
//!
//! # Data Flow
//! ```text
//! GET request path
//!     → resolver.rs (strip "/", default to index.html, join document root,
//!       reject traversal outside the root)
//!     → mime.rs (extension → content-type)
//!     → 200 + file bytes, or 404 "404 Not Found"
//! ```
//!
//! # Design Decisions
//! - Traversal is rejected lexically, before any filesystem access
//! - Whole-file reads; the files served are small pages and assets
//! - Unknown extensions fall back to application/octet-stream

pub mod mime;
pub mod resolver;

pub use resolver::{resolve, serve, ResolveError};
