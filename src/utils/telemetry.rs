//! Tracing subscriber setup.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppEnv;
use crate::utils::constant::DEFAULT_LOG_FILTER;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
/// Production emits bunyan-style JSON lines on stdout; every other environment
/// uses the human-readable formatter.
pub fn init_tracing(app_env: AppEnv) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match app_env {
        AppEnv::Production => tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").into(),
                std::io::stdout,
            ))
            .init(),
        AppEnv::Development => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}
