//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop source, connection limits)
//!     → connection.rs (active-connection tracking)
//!     → Hand off to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Bounded accept via semaphore prevents resource exhaustion
//! - The listener is owned by the accept loop; dropping the loop closes it
//! - addr.rs is best-effort discovery for display, never load-bearing

pub mod addr;
pub mod connection;
pub mod listener;

pub use addr::local_network_address;
pub use connection::{ConnectionGuard, ConnectionTracker};
pub use listener::BoundListener;
