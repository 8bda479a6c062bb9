//! Static file handler
//!
//! Files are read whole into memory per request; nothing is cached. The path
//! is not sanitized, so `..` segments reach outside the document root.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::http::response::Response;

/// Resolves `file` (which starts with `/`) under `root` by plain
/// concatenation, so `/static//x` stays relative to the root.
pub fn resolve_path(root: &Path, file: &str) -> PathBuf {
    let mut full = OsString::from(root.as_os_str());
    full.push(file);
    PathBuf::from(full)
}

/// Reads the file and wraps it as an octet-stream response, or the
/// "File Not Found" page when it cannot be read.
pub async fn serve(root: &Path, file: &str) -> Response {
    let full = resolve_path(root, file);

    match tokio::fs::read(&full).await {
        Ok(contents) => Response::file(contents),
        Err(e) => {
            debug!(path = %full.display(), error = %e, "Static file unavailable");
            Response::file_not_found()
        }
    }
}
