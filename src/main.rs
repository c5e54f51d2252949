//! Demo binary: a small site served from a generated document root.
//!
//! Serves an index page with a name form and registers `POST /name_form`.
//! Submitting the form regenerates the page with a greeting, the same flow
//! the server's embedding UIs drive through the public API.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use clap::Parser;
use http_body_util::{BodyExt, Full};
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Response, StatusCode};

use tinyserve::config::{load_config, ServerConfig};
use tinyserve::observability::logging;
use tinyserve::{local_network_address, HandlerResponse, Server};

#[derive(Parser)]
#[command(name = "tinyserve", about = "Embeddable HTTP server demo")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory to serve static files from.
    #[arg(long, default_value = "html")]
    document_root: PathBuf,

    /// Optional TOML config file; overrides the flags above.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("tinyserve=debug");

    let args = Args::parse();
    let config = match args.config {
        Some(path) => load_config(&path)?,
        None => ServerConfig {
            port: args.port,
            document_root: args.document_root,
            ..ServerConfig::default()
        },
    };

    std::fs::create_dir_all(&config.document_root)?;
    write_index(&config.document_root, None)?;

    let server = Server::new(config.clone());
    let document_root = config.document_root.clone();
    server.add_route("/name_form", Method::POST, move |req| {
        let document_root = document_root.clone();
        async move { handle_name_form(req, &document_root).await }
    });

    server.start().await?;

    let port = server.local_addr().map(|a| a.port()).unwrap_or(config.port);
    tracing::info!(url = %format!("http://localhost:{port}/"), "Demo site ready");
    if let Some(ip) = local_network_address() {
        tracing::info!(url = %format!("http://{ip}:{port}/"), "Reachable on the local network");
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    server.stop().await;
    Ok(())
}

/// Handle the name form post: regenerate the index page with a greeting and
/// return the new page. An empty body is a 400.
async fn handle_name_form(
    req: hyper::Request<hyper::body::Incoming>,
    document_root: &Path,
) -> HandlerResponse {
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read form body");
            return text_response(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error");
        }
    };
    if body.is_empty() {
        return text_response(StatusCode::BAD_REQUEST, "No data received in POST request.");
    }

    let text = String::from_utf8_lossy(&body);
    let name = text.rsplit('=').next().unwrap_or("").to_string();
    tracing::info!(name = %name, "Name form submitted");

    let page = render_page(Some(&name));
    if let Err(e) = std::fs::write(document_root.join("index.html"), &page) {
        tracing::error!(error = %e, "Failed to regenerate index page");
        return text_response(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error");
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html")
        .body(Full::new(Bytes::from(page)))
        .unwrap()
}

fn write_index(document_root: &Path, name: Option<&str>) -> std::io::Result<()> {
    std::fs::write(document_root.join("index.html"), render_page(name))
}

fn render_page(name: Option<&str>) -> String {
    let mut page = String::new();
    page.push_str("<html>\n");
    page.push_str("<head><title>tinyserve</title></head>\n");
    page.push_str("<body>\n");
    page.push_str("<h1>tinyserve</h1>\n");
    if let Some(name) = name {
        page.push_str(&format!("<h2>Hello {name}</h2>\n"));
    }
    page.push_str("<form action='/name_form' method='post'>\n");
    page.push_str("<input type='text' name='name' required>\n");
    page.push_str("<input type='submit' value='Submit'>\n");
    page.push_str("</form>\n");
    page.push_str("</body>\n");
    page.push_str("</html>\n");
    page
}

fn text_response(status: StatusCode, body: &'static str) -> HandlerResponse {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap()
}
