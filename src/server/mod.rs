//! Server lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! start()
//!     → bind listener (BindError surfaces to caller)
//!     → snapshot config into a Dispatcher
//!     → spawn accept loop (conn.rs)
//!
//! accept loop
//!     → select { shutdown signal | next connection }
//!     → one task per connection → hyper http1 → Dispatcher
//!
//! stop()
//!     → flip stopping flag, signal shutdown
//!     → join the accept loop (listener closes when the loop drops it)
//! ```
//!
//! # Design Decisions
//! - Stopped → Running → Stopped only; start/stop are idempotent and safe
//!   under concurrent callers (serialized on one lifecycle mutex)
//! - is_running() reads an atomic flag, never the mutex
//! - Stop waits for the accept loop only; in-flight request tasks finish
//!   naturally in the background
//! - Accept failures while running are reported on the error channel and the
//!   loop keeps going; failures while stopping are expected and swallowed

pub mod conn;
pub mod lifecycle;

pub use lifecycle::Server;
