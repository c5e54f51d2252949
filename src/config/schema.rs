//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration.
///
/// Effective only while the server is stopped; the server rejects mutation
/// while it is running.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port to listen on. 0 asks the OS for an ephemeral port.
    pub port: u16,

    /// Base directory static files are served from.
    pub document_root: PathBuf,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            document_root: PathBuf::from("."),
            max_connections: 10_000,
        }
    }
}
