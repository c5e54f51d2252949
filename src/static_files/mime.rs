//! Extension → content-type lookup.

use std::path::Path;

/// Content type served when the extension is unknown.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Resolve the content type for a file path from its extension.
///
/// Extension comparison is case-insensitive (`INDEX.HTML` is `text/html`).
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("xml") => "application/xml",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("txt") => "text/plain",
        _ => OCTET_STREAM,
    }
}
