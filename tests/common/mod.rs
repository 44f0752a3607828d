#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use guesty_dashboard::models::{StatusCheck, StatusCheckCreate};
use guesty_dashboard::services::store::{StatusStore, StoreError};
use tokio::net::TcpListener;

/// An in-memory store for integration tests.
///
/// Records live in a `Vec`, and connectivity and write/read failures can be
/// toggled to exercise the degraded and error paths.
#[derive(Debug, Default)]
pub struct MockStore {
    records: Mutex<Vec<StatusCheck>>,
    unreachable: AtomicBool,
    failing: AtomicBool,
    closed: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `ping` report the database as down
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Make `insert_one` and `find_all` fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Insert `count` records directly, bypassing the API
    pub fn seed(&self, count: usize) {
        let mut records = self.records.lock().unwrap();
        for i in 0..count {
            records.push(StatusCheck::new(StatusCheckCreate {
                client_name: format!("seeded-{i}"),
            }));
        }
    }

    /// Get all stored records
    pub fn records(&self) -> Vec<StatusCheck> {
        self.records.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusStore for MockStore {
    async fn ping(&self) -> bool {
        !self.unreachable.load(Ordering::SeqCst)
    }

    async fn insert_one(&self, record: &StatusCheck) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write rejected".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_all(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("read rejected".to_string()));
        }
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Spawns the application and returns its address.
///
/// Pass `None` as `store` to run in degraded mode. A `static_dir` that does not
/// exist runs the app in API-only mode.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(store: Option<Arc<MockStore>>, static_dir: &Path) -> String {
    let store = store.map(|s| s as Arc<dyn StatusStore>);
    let app = guesty_dashboard::app(store, static_dir);

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Spawns the application without static assets.
pub async fn spawn_api(store: Option<Arc<MockStore>>) -> String {
    spawn_app(store, Path::new("tests/data/does-not-exist")).await
}
