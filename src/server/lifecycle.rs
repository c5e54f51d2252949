//! The embeddable server and its start/stop state machine.
//!
//! # Responsibilities
//! - Own the configuration, route table and accept-loop task
//! - Guarantee clean Stopped → Running → Stopped transitions under
//!   concurrent callers
//! - Surface bind failures to the start() caller and accept failures on the
//!   error channel
//!
//! # Design Decisions
//! - One explicit struct per server, owned by the embedder; no globals
//! - start/stop serialize on a tokio mutex; the Running flag is an atomic so
//!   is_running() and the config guards never block
//! - Config mutation while Running returns an explicit error instead of
//!   being silently ignored
//! - The config is snapshotted at start; the route table stays live, so
//!   routes may be added while the server runs

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex, RwLock as StdRwLock};

use hyper::Method;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::dispatch::Dispatcher;
use crate::error::ServerError;
use crate::net::{BoundListener, ConnectionTracker};
use crate::routing::handler::{handler_fn, HandlerResponse};
use crate::routing::RouteTable;
use crate::server::conn::accept_loop;

/// Handles owned by a running server, taken back on stop.
#[derive(Default)]
struct Lifecycle {
    shutdown_tx: Option<watch::Sender<bool>>,
    accept_task: Option<JoinHandle<()>>,
}

/// An embeddable HTTP server.
///
/// Dispatches requests to registered route handlers and falls back to
/// serving static files from the document root. All methods take `&self`;
/// the server is safe to share behind an `Arc` across tasks.
pub struct Server {
    config: StdRwLock<ServerConfig>,
    routes: Arc<RouteTable>,
    running: Arc<AtomicBool>,
    lifecycle: Mutex<Lifecycle>,
    local_addr: StdRwLock<Option<SocketAddr>>,
    connections: ConnectionTracker,
    error_tx: mpsc::UnboundedSender<ServerError>,
    error_rx: StdMutex<mpsc::UnboundedReceiver<ServerError>>,
}

impl Server {
    /// Create a stopped server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let (error_tx, error_rx) = mpsc::unbounded_channel();
        Self {
            config: StdRwLock::new(config),
            routes: Arc::new(RouteTable::new()),
            running: Arc::new(AtomicBool::new(false)),
            lifecycle: Mutex::new(Lifecycle::default()),
            local_addr: StdRwLock::new(None),
            connections: ConnectionTracker::new(),
            error_tx,
            error_rx: StdMutex::new(error_rx),
        }
    }

    /// Set the listening port. Fails with [`ServerError::Locked`] while running.
    pub fn set_port(&self, port: u16) -> Result<(), ServerError> {
        if self.is_running() {
            return Err(ServerError::Locked);
        }
        self.config.write().expect("config lock poisoned").port = port;
        Ok(())
    }

    /// Set the document root. Fails with [`ServerError::Locked`] while running.
    pub fn set_document_root(&self, path: impl Into<PathBuf>) -> Result<(), ServerError> {
        if self.is_running() {
            return Err(ServerError::Locked);
        }
        self.config.write().expect("config lock poisoned").document_root = path.into();
        Ok(())
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> ServerConfig {
        self.config.read().expect("config lock poisoned").clone()
    }

    /// Register a route handler for `(path, method)`.
    ///
    /// Re-registering the same pair overwrites the previous handler (last
    /// writer wins). Allowed while the server is running. The handler runs
    /// on an arbitrary worker task.
    pub fn add_route<F, Fut>(&self, path: impl Into<String>, method: Method, handler: F)
    where
        F: Fn(hyper::Request<hyper::body::Incoming>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResponse> + Send + 'static,
    {
        self.routes.add(path, method, handler_fn(handler));
    }

    /// The shared route table, for callers that prefer the low-level API.
    pub fn routes(&self) -> Arc<RouteTable> {
        Arc::clone(&self.routes)
    }

    /// Start the server.
    ///
    /// No-op when already running. Binds the configured port, transitions to
    /// Running, and spawns the accept loop. Bind failure is returned to the
    /// caller and leaves the server stopped.
    pub async fn start(&self) -> Result<(), ServerError> {
        let mut lifecycle = self.lifecycle.lock().await;
        if self.is_running() {
            tracing::debug!("start() ignored, server already running");
            return Ok(());
        }

        let config = self.config();
        let listener = BoundListener::bind(config.port, config.max_connections).await?;
        let addr = listener.local_addr();

        let dispatcher = Arc::new(Dispatcher::new(
            Arc::clone(&self.routes),
            config.document_root.clone(),
        ));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        // Running is observable the moment the port is bound.
        self.running.store(true, Ordering::SeqCst);
        *self.local_addr.write().expect("addr lock poisoned") = Some(addr);

        let task = tokio::spawn(accept_loop(
            listener,
            dispatcher,
            shutdown_rx,
            Arc::clone(&self.running),
            self.connections.clone(),
            self.error_tx.clone(),
        ));

        lifecycle.shutdown_tx = Some(shutdown_tx);
        lifecycle.accept_task = Some(task);

        tracing::info!(address = %addr, document_root = %config.document_root.display(), "Server started");
        Ok(())
    }

    /// Stop the server.
    ///
    /// No-op when already stopped. Signals the accept loop, which drops the
    /// listening socket, and waits for the loop to exit before returning.
    /// In-flight request tasks are not awaited; they finish naturally.
    pub async fn stop(&self) {
        let mut lifecycle = self.lifecycle.lock().await;
        if !self.running.swap(false, Ordering::SeqCst) {
            tracing::debug!("stop() ignored, server not running");
            return;
        }

        if let Some(shutdown_tx) = lifecycle.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }
        if let Some(task) = lifecycle.accept_task.take() {
            if task.await.is_err() {
                tracing::error!("Accept loop task panicked");
            }
        }
        *self.local_addr.write().expect("addr lock poisoned") = None;

        tracing::info!("Server stopped");
    }

    /// Whether the server is currently running.
    ///
    /// Lock-free; safe to call from any task concurrently with start/stop.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// The bound listening address while running, `None` when stopped.
    ///
    /// With port 0 this is where the OS-assigned port shows up.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        *self.local_addr.read().expect("addr lock poisoned")
    }

    /// Number of connections currently being served.
    pub fn active_connections(&self) -> usize {
        self.connections.active()
    }

    /// Take the next accept-loop error, if one has been reported.
    ///
    /// Accept failures never stop the loop; they queue here for the embedder
    /// to inspect.
    pub fn take_error(&self) -> Option<ServerError> {
        self.error_rx
            .lock()
            .expect("error channel lock poisoned")
            .try_recv()
            .ok()
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
