//! TCP listener with backpressure.
//!
//! # Responsibilities
//! - Bind the configured port
//! - Accept incoming TCP connections
//! - Enforce the max_connections limit via semaphore
//!
//! # Design Decisions
//! - Port 0 asks the OS for an ephemeral port; the bound address is exposed
//!   so callers (and tests) can discover it
//! - A connection permit is returned with each stream and held for the
//!   connection's lifetime; when the limit is reached, accept waits

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::error::ServerError;

/// A bounded TCP listener that limits concurrent connections.
pub struct BoundListener {
    inner: TcpListener,
    local_addr: SocketAddr,
    connection_limit: Arc<Semaphore>,
}

/// A permit representing a connection slot.
///
/// Dropping the permit returns the slot to the listener.
pub struct ConnectionPermit {
    _permit: OwnedSemaphorePermit,
}

impl BoundListener {
    /// Bind `0.0.0.0:port` with the given connection limit.
    pub async fn bind(port: u16, max_connections: usize) -> Result<Self, ServerError> {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .map_err(ServerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ServerError::Bind)?;

        tracing::info!(
            address = %local_addr,
            max_connections,
            "Listener bound"
        );

        Ok(Self {
            inner: listener,
            local_addr,
            connection_limit: Arc::new(Semaphore::new(max_connections)),
        })
    }

    /// Accept a new connection, respecting the connection limit.
    pub async fn accept(&self) -> Result<(TcpStream, SocketAddr, ConnectionPermit), ServerError> {
        // Acquire the slot first so acceptance itself is backpressured.
        let permit = self
            .connection_limit
            .clone()
            .acquire_owned()
            .await
            .expect("connection semaphore closed");

        let (stream, addr) = self.inner.accept().await.map_err(ServerError::Accept)?;

        tracing::debug!(
            peer_addr = %addr,
            available_permits = self.connection_limit.available_permits(),
            "Connection accepted"
        );

        Ok((stream, addr, ConnectionPermit { _permit: permit }))
    }

    /// The address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}
