//! # Status Check Store
//!
//! This module provides persistence for [`StatusCheck`] records behind the
//! [`StatusStore`] trait, so handlers never talk to the database driver directly
//! and tests can swap in an in-memory implementation.
//!
//! ## Implementations
//!
//! - [`MongoStore`] - MongoDB-backed store used in every deployed environment
//!
//! The driver manages its own connection pool, so a single store instance is
//! shared by all requests without additional locking. No operation is retried.

use std::sync::Arc;

use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::StatusCheck;
use crate::utils::constant::STATUS_CHECK_COLLECTION;

/// Errors that can occur during persistence operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),

    /// A stored document could not be mapped back to a [`StatusCheck`].
    #[error("malformed document: {0}")]
    Malformed(String),

    /// Failure reported by a store that is not backed by MongoDB.
    #[error("{0}")]
    Backend(String),
}

/// Trait for status check persistence
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Issues a lightweight liveness check.
    ///
    /// Failures are reported as `false`, never as an error.
    async fn ping(&self) -> bool;

    /// Persists one record.
    async fn insert_one(&self, record: &StatusCheck) -> Result<(), StoreError>;

    /// Retrieves up to `limit` records in storage order, without filtering.
    async fn find_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError>;

    /// Releases the underlying connection resources.
    async fn close(&self);
}

/// Shape of a status check inside the `status_checks` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusCheckDocument {
    id: String,
    client_name: String,
    timestamp: bson::DateTime,
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(record: &StatusCheck) -> Self {
        Self {
            id: record.id().to_string(),
            client_name: record.client_name().to_string(),
            timestamp: bson::DateTime::from_time_0_3(record.timestamp()),
        }
    }
}

impl TryFrom<StatusCheckDocument> for StatusCheck {
    type Error = StoreError;

    fn try_from(doc: StatusCheckDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| StoreError::Malformed(format!("invalid id `{}`: {e}", doc.id)))?;

        Ok(StatusCheck::from_parts(
            id,
            doc.client_name,
            doc.timestamp.to_time_0_3(),
        ))
    }
}

/// MongoDB-backed status check store
pub struct MongoStore {
    client: Client,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStore {
    /// Builds a store from a connection string and database name.
    ///
    /// Only the URI is parsed here; the driver connects lazily on first use, so
    /// an unreachable server surfaces later through [`StatusStore::ping`] or as
    /// an operation error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Driver`] if the connection string is invalid.
    #[instrument(skip(url))]
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let collection = client
            .database(db_name)
            .collection::<StatusCheckDocument>(STATUS_CHECK_COLLECTION);

        info!(collection = STATUS_CHECK_COLLECTION, "MongoDB client created");
        Ok(Self { client, collection })
    }
}

/// Builds the persistence client described by `config`.
///
/// Returns `None`, and so selects degraded mode, when `MONGO_URL` is absent or
/// cannot be parsed. Startup never fails because of the database.
pub async fn connect_from_config(config: &AppConfig) -> Option<Arc<dyn StatusStore>> {
    let store = match &config.mongo_url {
        Some(url) => match MongoStore::connect(url, &config.db_name).await {
            Ok(store) => {
                info!(db_name = %config.db_name, "MongoDB connection established");
                Some(Arc::new(store) as Arc<dyn StatusStore>)
            }
            Err(e) => {
                error!(error = %e, "MongoDB connection error");
                None
            }
        },
        None => {
            error!("MONGO_URL environment variable is required");
            None
        }
    };

    if store.is_none() {
        warn!("MongoDB connection failed - running in degraded mode");
    }

    store
}

#[async_trait]
impl StatusStore for MongoStore {
    #[instrument(skip(self))]
    async fn ping(&self) -> bool {
        match self
            .client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "MongoDB ping failed");
                false
            }
        }
    }

    #[instrument(skip_all, fields(id = %record.id()))]
    async fn insert_one(&self, record: &StatusCheck) -> Result<(), StoreError> {
        self.collection
            .insert_one(StatusCheckDocument::from(record))
            .await?;
        debug!("Inserted status check");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let docs: Vec<StatusCheckDocument> = cursor.try_collect().await?;
        debug!(count = docs.len(), "Fetched status checks");

        docs.into_iter().map(StatusCheck::try_from).collect()
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB connection closed");
    }
}
