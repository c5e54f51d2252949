//! URL path → file path resolution and serving.
//!
//! # Responsibilities
//! - Map a request path to a file under the document root
//! - Substitute index.html for the root path
//! - Reject paths that escape the document root
//! - Produce the 200/404/500 response for a static file request
//!
//! # Design Decisions
//! - Normalization is lexical: ".." segments are resolved against the
//!   already-accepted segments and can never pop past the root. The original
//!   joined paths blindly; the guard here is a deliberate safety fix
//! - A path that exists but is not a regular file (a directory) is a 404,
//!   matching an existence check on a file
//! - Read failures on an existing file are a 500, never leaked detail

use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::CONTENT_TYPE;
use hyper::{Response, StatusCode};

use crate::routing::handler::HandlerResponse;
use crate::static_files::mime;

/// Body served with every 404.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Error type for path resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The path would resolve outside the document root.
    Traversal,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Traversal => write!(f, "path escapes the document root"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve a URL path to an absolute file path under `document_root`.
///
/// Strips the leading `/`; an empty path becomes `index.html`. The result is
/// always inside `document_root` or the call fails with
/// [`ResolveError::Traversal`]. Existence is not checked here.
pub fn resolve(url_path: &str, document_root: &Path) -> Result<PathBuf, ResolveError> {
    let relative = url_path.trim_start_matches('/');
    let relative = if relative.is_empty() { "index.html" } else { relative };

    // Lexical normalization: ".." may only consume segments already accepted.
    let mut normalized = PathBuf::new();
    let mut depth: usize = 0;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => {
                normalized.push(segment);
                depth += 1;
            }
            Component::ParentDir => {
                if depth == 0 {
                    return Err(ResolveError::Traversal);
                }
                normalized.pop();
                depth -= 1;
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => {
                return Err(ResolveError::Traversal);
            }
        }
    }

    Ok(document_root.join(normalized))
}

/// Serve a static file request.
///
/// Returns 200 with the file bytes and extension-derived content type, 404
/// with [`NOT_FOUND_BODY`] when there is no such file (including rejected
/// traversal), or 500 when an existing file cannot be read.
pub async fn serve(url_path: &str, document_root: &Path) -> HandlerResponse {
    let file_path = match resolve(url_path, document_root) {
        Ok(p) => p,
        Err(ResolveError::Traversal) => {
            tracing::warn!(path = %url_path, "Rejected path traversal attempt");
            return not_found();
        }
    };

    let is_file = tokio::fs::metadata(&file_path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        tracing::debug!(file = %file_path.display(), "Static file not found");
        return not_found();
    }

    match tokio::fs::read(&file_path).await {
        Ok(contents) => {
            let content_type = mime::from_path(&file_path);
            tracing::debug!(
                file = %file_path.display(),
                content_type,
                bytes = contents.len(),
                "Serving static file"
            );
            Response::builder()
                .status(StatusCode::OK)
                .header(CONTENT_TYPE, content_type)
                .body(Full::new(Bytes::from(contents)))
                .unwrap()
        }
        Err(e) => {
            tracing::error!(file = %file_path.display(), error = %e, "Static file read failed");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header(CONTENT_TYPE, "text/plain")
                .body(Full::new(Bytes::from_static(b"500 Internal Server Error")))
                .unwrap()
        }
    }
}

/// The canonical 404 response.
pub fn not_found() -> HandlerResponse {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(CONTENT_TYPE, "text/plain")
        .body(Full::new(Bytes::from_static(NOT_FOUND_BODY.as_bytes())))
        .unwrap()
}
