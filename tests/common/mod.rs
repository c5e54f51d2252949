//! Shared utilities for integration testing.

use std::path::Path;
use std::sync::Arc;

use tinyserve::{Server, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Start a server on an ephemeral port serving `document_root`.
pub async fn start_server(document_root: &Path) -> Arc<Server> {
    let server = Arc::new(Server::new(ServerConfig {
        port: 0,
        document_root: document_root.to_path_buf(),
        ..ServerConfig::default()
    }));
    server.start().await.expect("server should start");
    server
}

/// Base URL of a running server.
pub fn base_url(server: &Server) -> String {
    let addr = server.local_addr().expect("server not running");
    format!("http://127.0.0.1:{}", addr.port())
}

/// A client that never reuses connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Issue a GET with a raw, unnormalized request path.
///
/// HTTP clients normalize `..` segments away before sending; traversal tests
/// need the path to reach the server untouched.
#[allow(dead_code)]
pub async fn raw_get(server: &Server, path: &str) -> String {
    let addr = server.local_addr().expect("server not running");
    let mut stream = TcpStream::connect(("127.0.0.1", addr.port()))
        .await
        .expect("connect failed");

    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}
