//! Accept loop and per-connection serving.
//!
//! # Responsibilities
//! - Wait for the next connection or the shutdown signal
//! - Spawn one task per accepted connection
//! - Drive hyper's HTTP/1.1 connection state machine
//!
//! # Design Decisions
//! - The loop owns the listener; breaking out of the loop drops and closes
//!   it, so a pending accept never outlives stop()
//! - Accept errors are classified against the stopping flag before being
//!   reported: a failure during shutdown is expected control flow

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};

use crate::dispatch::Dispatcher;
use crate::error::ServerError;
use crate::net::{BoundListener, ConnectionTracker};

/// Run the accept loop until the shutdown signal fires.
///
/// Never returns an error: per-connection and accept failures are contained
/// here, the loop only ends on shutdown.
pub(crate) async fn accept_loop(
    listener: BoundListener,
    dispatcher: Arc<Dispatcher>,
    mut shutdown_rx: watch::Receiver<bool>,
    running: Arc<AtomicBool>,
    connections: ConnectionTracker,
    error_tx: mpsc::UnboundedSender<ServerError>,
) {
    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => {
                tracing::debug!("Accept loop received shutdown signal");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer_addr, permit)) => {
                    let dispatcher = Arc::clone(&dispatcher);
                    let guard = connections.track();
                    tokio::spawn(async move {
                        serve_connection(stream, dispatcher).await;
                        drop(guard);
                        drop(permit);
                    });
                    tracing::trace!(peer_addr = %peer_addr, "Connection task spawned");
                }
                Err(e) => {
                    if !running.load(Ordering::SeqCst) {
                        // Induced by shutdown, not a fault.
                        break;
                    }
                    tracing::error!(error = %e, "Failed to accept connection");
                    let _ = error_tx.send(e);
                    // Transient failures (fd exhaustion) resolve with time.
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
            }
        }
    }
    tracing::debug!("Accept loop exited");
    // The listener drops here, closing the socket.
}

/// Serve HTTP/1.1 on one accepted connection.
async fn serve_connection(stream: TcpStream, dispatcher: Arc<Dispatcher>) {
    let io = TokioIo::new(stream);
    let service = service_fn(move |req| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { Ok::<_, Infallible>(dispatcher.dispatch(req).await) }
    });

    if let Err(e) = hyper::server::conn::http1::Builder::new()
        .serve_connection(io, service)
        .await
    {
        // Clients disconnecting mid-request are routine.
        tracing::debug!(error = %e, "Connection closed with error");
    }
}
