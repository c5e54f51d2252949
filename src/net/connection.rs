//! Active-connection tracking.
//!
//! # Responsibilities
//! - Count connections currently being served
//! - Expose the count as a cheap read-only gauge
//!
//! Stop does not wait on this count: in-flight requests finish naturally in
//! the background while the accept loop is joined. The gauge exists so
//! callers can observe the drain.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Tracks how many connections are currently being served.
#[derive(Debug, Clone, Default)]
pub struct ConnectionTracker {
    active: Arc<AtomicUsize>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new connection. The returned guard decrements on drop.
    pub fn track(&self) -> ConnectionGuard {
        self.active.fetch_add(1, Ordering::Relaxed);
        ConnectionGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// Current number of connections being served.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}

/// Guard for one tracked connection.
pub struct ConnectionGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_decrements_on_drop() {
        let tracker = ConnectionTracker::new();
        assert_eq!(tracker.active(), 0);

        let a = tracker.track();
        let b = tracker.track();
        assert_eq!(tracker.active(), 2);

        drop(a);
        assert_eq!(tracker.active(), 1);
        drop(b);
        assert_eq!(tracker.active(), 0);
    }
}
