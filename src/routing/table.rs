//! Route storage and lookup.
//!
//! # Responsibilities
//! - Store registered (path, method) → handler entries
//! - Look up the handler for a request, or explicit None
//! - Allow concurrent lookups from many request tasks
//!
//! # Design Decisions
//! - At most one handler per (path, method); re-registration overwrites
//!   silently (last writer wins)
//! - Registration never fails
//! - RwLock rather than a frozen map: callers may register routes while the
//!   server is running

use std::collections::HashMap;
use std::sync::RwLock;

use hyper::Method;

use crate::routing::handler::BoxedHandler;

/// Registry mapping `(path, method)` pairs to handlers.
#[derive(Default)]
pub struct RouteTable {
    entries: RwLock<HashMap<(String, Method), BoxedHandler>>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `(path, method)`, overwriting any existing entry.
    pub fn add(&self, path: impl Into<String>, method: Method, handler: BoxedHandler) {
        let path = path.into();
        tracing::debug!(path = %path, method = %method, "Route registered");
        self.entries
            .write()
            .expect("route table lock poisoned")
            .insert((path, method), handler);
    }

    /// Look up the handler for `(path, method)`.
    ///
    /// Exact, case-sensitive match on the path. Returns a clone of the
    /// handler so the read lock is released before the handler runs.
    pub fn lookup(&self, path: &str, method: &Method) -> Option<BoxedHandler> {
        self.entries
            .read()
            .expect("route table lock poisoned")
            .get(&(path.to_string(), method.clone()))
            .cloned()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.read().expect("route table lock poisoned").len()
    }

    /// True if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::handler_fn;
    use http_body_util::Full;
    use hyper::Response;

    fn tagged(tag: &'static str) -> BoxedHandler {
        handler_fn(move |_req| async move { Response::new(Full::new(tag.into())) })
    }

    #[test]
    fn lookup_matches_exact_path_and_method() {
        let table = RouteTable::new();
        table.add("/api/ping", Method::GET, tagged("ping"));

        assert!(table.lookup("/api/ping", &Method::GET).is_some());
        assert!(table.lookup("/api/ping", &Method::POST).is_none());
        assert!(table.lookup("/api/Ping", &Method::GET).is_none()); // path is case-sensitive
        assert!(table.lookup("/api/ping/", &Method::GET).is_none()); // no prefix matching
    }

    #[test]
    fn reregistration_overwrites_silently() {
        let table = RouteTable::new();
        let first = tagged("first");
        let second = tagged("second");
        table.add("/form", Method::POST, first.clone());
        table.add("/form", Method::POST, second.clone());

        assert_eq!(table.len(), 1);
        let found = table.lookup("/form", &Method::POST).unwrap();
        assert!(std::sync::Arc::ptr_eq(&found, &second));
        assert!(!std::sync::Arc::ptr_eq(&found, &first));
    }

    #[test]
    fn same_path_different_methods_coexist() {
        let table = RouteTable::new();
        table.add("/thing", Method::GET, tagged("get"));
        table.add("/thing", Method::DELETE, tagged("delete"));

        assert_eq!(table.len(), 2);
        assert!(table.lookup("/thing", &Method::GET).is_some());
        assert!(table.lookup("/thing", &Method::DELETE).is_some());
        assert!(table.lookup("/thing", &Method::PUT).is_none());
    }
}
