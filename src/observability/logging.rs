//! Structured logging setup.
//!
//! # Responsibilities
//! - Install the tracing subscriber for binaries
//! - Respect RUST_LOG, with a sensible default filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Call once, from the binary;
/// embedders that already have a subscriber should not call this.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
