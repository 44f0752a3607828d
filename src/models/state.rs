use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::services::store::StatusStore;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Persistence client. `None` when it could not be constructed at startup,
    /// in which case the API runs in degraded mode.
    store: Option<Arc<dyn StatusStore>>,
}

impl AppState {
    /// Creates the shared state around an optional persistence client.
    pub fn new(store: Option<Arc<dyn StatusStore>>) -> Self {
        if store.is_some() {
            info!("Initializing application state with database");
        } else {
            warn!("Initializing application state without database");
        }

        Self { store }
    }

    /// Returns the persistence client, or [`AppError::DbUnavailable`] in degraded mode.
    pub fn store(&self) -> AppResult<&dyn StatusStore> {
        self.store.as_deref().ok_or(AppError::DbUnavailable)
    }

    /// Pings the database. Always `false` in degraded mode.
    #[instrument(skip_all)]
    pub async fn database_connected(&self) -> bool {
        match &self.store {
            Some(store) => store.ping().await,
            None => false,
        }
    }
}
