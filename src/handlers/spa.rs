//! # Single-Page Application Hosting
//!
//! Serves the prebuilt client application. Existing files are returned
//! verbatim; any other path gets the index document so client-side routing
//! works. Unmatched `/api/...` paths are caught before that fallback so broken
//! API calls fail loudly instead of receiving HTML.

use std::path::Path;

use axum::http::Uri;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::utils::constant::INDEX_DOCUMENT;

/// Rejects API paths that no route matched.
///
/// ANY /api/{*path}
///
/// # Returns
///
/// Always `404 Not Found` with "API endpoint not found".
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn api_not_found(uri: Uri) -> AppError {
    warn!("Unmatched API path");
    AppError::NotFound("API endpoint not found")
}

/// Builds the static asset service for `dir`.
///
/// Returns `None` if the directory does not exist, which leaves the
/// application in API-only mode.
pub fn spa_service(dir: &Path) -> Option<ServeDir<ServeFile>> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Static directory not found, serving API only");
        return None;
    }

    info!(dir = %dir.display(), "Serving single-page application");
    Some(ServeDir::new(dir).fallback(ServeFile::new(dir.join(INDEX_DOCUMENT))))
}
