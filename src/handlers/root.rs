use axum::Json;
use tracing::{debug, instrument};

use crate::models::ApiInfo;
use crate::utils::constant::{SERVICE_NAME, SERVICE_VERSION};

/// Describes the service.
///
/// GET /api/
#[instrument]
pub async fn root() -> Json<ApiInfo> {
    debug!("Root endpoint accessed");
    Json(ApiInfo {
        message: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}
