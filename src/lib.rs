//! # Guesty Dashboard - Backend API
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven runtime configuration
//! - [`error`] - Application error type and its HTTP mapping
//! - [`handlers`] - HTTP request handlers and static asset hosting
//! - [`models`] - Domain records and shared application state
//! - [`services`] - Persistence of status check records
//! - [`utils`] - Constants, telemetry and shutdown helpers

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::handlers::{
    api_not_found, create_status_check, health_check, list_status_checks, root, spa_service,
};
use crate::models::AppState;
use crate::services::store::StatusStore;

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `store` - Persistence client, or `None` to run in degraded mode
/// * `static_dir` - Prebuilt single-page application; ignored if it does not exist
///
/// # Routing
///
/// 1. Defined `/api` routes
/// 2. Any other `/api/...` path answers `404 API endpoint not found`
/// 3. Existing files under `static_dir`, else its `index.html`
///
/// CORS allows every origin, method and header. This is not suitable for
/// production as written.
pub fn app(store: Option<Arc<dyn StatusStore>>, static_dir: &Path) -> Router {
    let state = Arc::new(AppState::new(store));

    let api_routes = Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/status", get(list_status_checks).post(create_status_check))
        .route("/api/{*path}", any(api_not_found))
        .with_state(state);

    let router = match spa_service(static_dir) {
        Some(spa) => api_routes.fallback_service(spa),
        None => {
            info!("Running in API-only mode");
            api_routes
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// Serves [`app`] on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained first, then the persistence client is
/// closed.
pub async fn serve<F>(
    listener: TcpListener,
    store: Option<Arc<dyn StatusStore>>,
    static_dir: &Path,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = app(store.clone(), static_dir);

    info!("Server starting at http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    if let Some(store) = store {
        store.close().await;
    }

    Ok(())
}
