//! Route handler types.
//!
//! Handlers are async functions over hyper request/response types. They are
//! invoked on an arbitrary worker task, so they must be `Send + Sync` and own
//! their captures.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::{Request, Response};

/// Response type produced by route handlers and the dispatcher.
pub type HandlerResponse = Response<Full<Bytes>>;

/// Future returned by a route handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResponse> + Send>>;

/// A registered route handler.
///
/// The handler is fully responsible for the response it produces: status,
/// headers and body. The dispatcher writes it to the connection verbatim.
pub type BoxedHandler = Arc<dyn Fn(Request<Incoming>) -> HandlerFuture + Send + Sync>;

/// Wrap an async function into a [`BoxedHandler`].
///
/// ```no_run
/// use tinyserve::routing::handler::handler_fn;
/// use http_body_util::Full;
/// use hyper::Response;
///
/// let h = handler_fn(|_req| async {
///     Response::new(Full::new("hello".into()))
/// });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> BoxedHandler
where
    F: Fn(Request<Incoming>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResponse> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}
