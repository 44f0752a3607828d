use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Overall service health as reported by `GET /api/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    /// The API is up but the database is unreachable or was never configured.
    Degraded,
}

/// Response body of the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: HealthStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub database_connected: bool,
}

impl HealthCheck {
    /// Builds a report for the given connectivity, stamped with the current UTC time.
    pub fn from_connectivity(database_connected: bool) -> Self {
        Self {
            status: if database_connected {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            timestamp: OffsetDateTime::now_utc(),
            database_connected,
        }
    }
}

/// Static service description returned by `GET /api/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
}
