//! # Application Constants
//!
//! This module defines configuration constants used throughout the dashboard API.
//! These constants control query caps and configuration defaults.

/// Human-readable service name reported by the root endpoint and in logs.
pub const SERVICE_NAME: &str = "Guesty Financial Dashboard API";

/// Service version reported by the root endpoint.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of status checks returned by a single listing request
pub const STATUS_CHECK_LIST_LIMIT: i64 = 1000;

/// MongoDB collection holding status check records
pub const STATUS_CHECK_COLLECTION: &str = "status_checks";

/// Database used when `DB_NAME` is not set
pub const DEFAULT_DB_NAME: &str = "guesty_dashboard";

/// Bind address used when `HOST` is not set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listen port used when `PORT` is not set or cannot be parsed
pub const DEFAULT_PORT: u16 = 8000;

/// Prebuilt single-page application directory used when `STATIC_DIR` is not set
pub const DEFAULT_STATIC_DIR: &str = "frontend/build";

/// Document served for any non-API path that is not an existing file
pub const INDEX_DOCUMENT: &str = "index.html";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "guesty_dashboard=info,tower_http=info";
