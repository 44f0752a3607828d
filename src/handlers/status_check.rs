//! # Status Check Handlers
//!
//! Create and list append-only status check records.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::error::AppResult;
use crate::models::{AppState, StatusCheck, StatusCheckCreate};
use crate::utils::constant::STATUS_CHECK_LIST_LIMIT;

/// Creates a status check.
///
/// POST /api/status
///
/// The record's `id` and `timestamp` are generated server-side; only
/// `client_name` is taken from the request.
///
/// # Returns
///
/// - `200 OK` with the persisted [`StatusCheck`]
/// - `400 Bad Request` - Empty `client_name`
/// - `500 Internal Server Error` - Insert failed
/// - `503 Service Unavailable` - No database configured
#[instrument(
    skip_all,
    fields(
        client_name = %payload.client_name,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<StatusCheckCreate>,
) -> AppResult<Json<StatusCheck>> {
    payload.validate().inspect_err(|e| {
        warn!(error = %e, "Invalid status check payload");
    })?;

    let store = state.store()?;
    let record = StatusCheck::new(payload);
    store.insert_one(&record).await?;

    info!(id = %record.id(), "Status check created");
    Ok(Json(record))
}

/// Lists status checks.
///
/// GET /api/status
///
/// Returns at most [`STATUS_CHECK_LIST_LIMIT`] records in whatever order the
/// database yields them.
///
/// # Returns
///
/// - `200 OK` with a list of [`StatusCheck`]
/// - `500 Internal Server Error` - Query failed
/// - `503 Service Unavailable` - No database configured
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_status_checks(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<StatusCheck>>> {
    let store = state.store()?;
    let records = store.find_all(STATUS_CHECK_LIST_LIMIT).await?;

    debug!(count = records.len(), "Listed status checks");
    Ok(Json(records))
}
