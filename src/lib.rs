//! tinyserve — an embeddable HTTP server.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌─────────────────────────────────────────────────┐
//!                  │                    TINYSERVE                    │
//!                  │                                                 │
//!   Client Request │  ┌──────────────┐      ┌─────────────────────┐  │
//!   ───────────────┼─▶│ net/listener │─────▶│ server (accept loop)│  │
//!                  │  └──────────────┘      └──────────┬──────────┘  │
//!                  │                                   ▼             │
//!                  │                        ┌─────────────────────┐  │
//!                  │                        │ dispatch::Dispatcher│  │
//!                  │                        └─────┬─────────┬─────┘  │
//!                  │                    route hit │         │ miss   │
//!                  │                              ▼         ▼        │
//!                  │                     ┌──────────┐ ┌────────────┐ │
//!                  │                     │ routing  │ │static_files│ │
//!                  │                     │  table   │ │mime+resolve│ │
//!                  │                     └──────────┘ └────────────┘ │
//!                  │                                                 │
//!                  │  cross-cutting: config · error · observability  │
//!                  └─────────────────────────────────────────────────┘
//! ```
//!
//! Requests hit the route table first; on a miss, GET requests fall back to
//! static files under the document root, everything else is a 404. The
//! server is an explicit struct owned by the embedder, with idempotent
//! start/stop and a lock-free `is_running` observable.
//!
//! ```no_run
//! use tinyserve::{Server, ServerConfig};
//! use hyper::{Method, Response};
//! use http_body_util::Full;
//!
//! # async fn run() -> Result<(), tinyserve::ServerError> {
//! let server = Server::new(ServerConfig {
//!     port: 8080,
//!     document_root: "/tmp/site".into(),
//!     ..ServerConfig::default()
//! });
//! server.add_route("/ping", Method::GET, |_req| async {
//!     Response::new(Full::new("pong".into()))
//! });
//! server.start().await?;
//! // ...
//! server.stop().await;
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod net;
pub mod routing;
pub mod server;
pub mod static_files;

// Cross-cutting concerns
pub mod error;
pub mod observability;

pub use config::ServerConfig;
pub use error::ServerError;
pub use net::local_network_address;
pub use routing::handler::{handler_fn, HandlerResponse};
pub use server::Server;
