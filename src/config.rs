//! # Configuration
//!
//! Runtime settings are read once at startup from environment variables (after
//! `.env` has been loaded by `main`) into an explicit [`AppConfig`] which is then
//! passed to whoever needs it. Missing or malformed optional values fall back to
//! the defaults in [`crate::utils::constant`] and are logged rather than fatal.
//!
//! ## Environment Variables
//!
//! - `MONGO_URL` - MongoDB connection string; absent means degraded mode
//! - `DB_NAME` - Database name (default `guesty_dashboard`)
//! - `HOST` / `PORT` - Listen address (default `0.0.0.0:8000`)
//! - `STATIC_DIR` - Prebuilt single-page application directory
//! - `APP_ENV` - `production` switches logging to JSON output

use std::env;
use std::path::PathBuf;

use tracing::error;

use crate::utils::constant::*;

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    /// Reads `APP_ENV` from the process environment.
    ///
    /// Needed before the tracing subscriber exists, so that later
    /// configuration warnings are not dropped.
    pub fn from_env() -> Self {
        env::var("APP_ENV")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

/// Application settings resolved at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string. `None` when unset or blank.
    pub mongo_url: Option<String>,
    pub db_name: String,
    pub host: String,
    pub port: u16,
    /// Directory holding the prebuilt single-page application.
    pub static_dir: PathBuf,
    pub app_env: AppEnv,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                error!(port = %raw, "Invalid PORT env var, using fallback {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            mongo_url: get("MONGO_URL"),
            db_name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            app_env: get("APP_ENV")
                .map(|raw| AppEnv::parse(&raw))
                .unwrap_or_default(),
        }
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
