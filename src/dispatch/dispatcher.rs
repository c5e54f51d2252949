//! Per-request dispatch: routes first, static files second.
//!
//! # Responsibilities
//! - Look up the route table and invoke the matched handler
//! - Fall back to static file serving for GET requests
//! - Contain handler faults to the request that caused them
//!
//! # Design Decisions
//! - Exactly one response per request on every path through this module
//! - Handlers run on their own spawned task; a panic is observed as a
//!   JoinError and converted to a 500 instead of unwinding into the
//!   connection task

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request, Response, StatusCode};

use crate::routing::handler::HandlerResponse;
use crate::routing::RouteTable;
use crate::static_files;

/// Dispatches one request to a route handler or the static file resolver.
///
/// Holds a snapshot of the document root taken at server start; the route
/// table is shared and live.
pub struct Dispatcher {
    routes: Arc<RouteTable>,
    document_root: PathBuf,
}

impl Dispatcher {
    pub fn new(routes: Arc<RouteTable>, document_root: PathBuf) -> Self {
        Self {
            routes,
            document_root,
        }
    }

    /// Produce the response for one request.
    pub async fn dispatch(&self, req: Request<Incoming>) -> HandlerResponse {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        tracing::debug!(method = %method, path = %path, "Dispatching request");

        if let Some(handler) = self.routes.lookup(&path, &method) {
            return Self::invoke_handler(handler(req), &method, &path).await;
        }

        if method == Method::GET {
            return static_files::serve(&path, &self.document_root).await;
        }

        tracing::debug!(method = %method, path = %path, "No route for non-GET request");
        static_files::resolver::not_found()
    }

    /// Run a handler future isolated on its own task.
    ///
    /// The spawn boundary turns a handler panic into a `JoinError` here
    /// rather than an unwind through the connection task.
    async fn invoke_handler(
        fut: crate::routing::handler::HandlerFuture,
        method: &Method,
        path: &str,
    ) -> HandlerResponse {
        match tokio::spawn(fut).await {
            Ok(response) => response,
            Err(e) => {
                if e.is_panic() {
                    tracing::error!(method = %method, path = %path, "Route handler panicked");
                } else {
                    tracing::error!(method = %method, path = %path, error = %e, "Route handler task failed");
                }
                internal_error()
            }
        }
    }
}

/// Generic 500 with no internal detail.
fn internal_error() -> HandlerResponse {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(b"500 Internal Server Error")))
        .unwrap()
}
