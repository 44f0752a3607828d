//! # Health Check Handler
//!
//! Health endpoint for load balancers and monitoring. It reports whether the
//! database answers a ping but never fails itself, so a degraded database does
//! not take the API out of rotation.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, instrument, warn};

use crate::models::{AppState, HealthCheck};

/// Health check endpoint.
///
/// GET /api/health
///
/// Pings the database on every call. Status is `healthy` when the ping
/// succeeds and `degraded` otherwise, including when the application started
/// without a database.
///
/// # Returns
///
/// Always returns `200 OK` with a [`HealthCheck`] body.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthCheck> {
    let database_connected = state.database_connected().await;

    if database_connected {
        debug!("Health check passed");
    } else {
        warn!("Health check reports degraded database");
    }

    Json(HealthCheck::from_connectivity(database_connected))
}
