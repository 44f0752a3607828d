//! Exercises [`MongoStore`] directly.
//!
//! The round trip test needs a live server and runs only when `MONGO_URL` is
//! set (a `.env` file is honoured). It works in its own throwaway database,
//! dropped before any assertion runs. The unreachable-server test needs no
//! server and always runs.

use std::collections::HashSet;

use guesty_dashboard::models::{StatusCheck, StatusCheckCreate};
use guesty_dashboard::services::store::{MongoStore, StatusStore, StoreError};
use uuid::Uuid;

/// Nothing listens on port 1; server selection gives up quickly
const UNREACHABLE_URL: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200";

fn mongo_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("MONGO_URL").ok().filter(|v| !v.is_empty())
}

async fn drop_database(url: &str, db_name: &str) {
    let client = mongodb::Client::with_uri_str(url)
        .await
        .expect("Failed to create cleanup client");
    client
        .database(db_name)
        .drop()
        .await
        .expect("Failed to drop test database");
}

fn new_record(name: &str) -> StatusCheck {
    StatusCheck::new(StatusCheckCreate {
        client_name: name.to_string(),
    })
}

#[test_log::test(tokio::test)]
async fn insert_then_find_round_trips_records() {
    let Some(url) = mongo_url() else {
        eprintln!("MONGO_URL not set, skipping");
        return;
    };
    let db_name = format!("test_db_{}", Uuid::new_v4().simple());
    let store = MongoStore::connect(&url, &db_name)
        .await
        .expect("Failed to connect");

    let outcome = async {
        let reachable = store.ping().await;

        let mut created = HashSet::new();
        for name in ["acme", "globex"] {
            let record = new_record(name);
            store.insert_one(&record).await?;
            created.insert(record.id());
        }

        let listed = store.find_all(1000).await?;
        let limited = store.find_all(1).await?;
        Ok::<_, StoreError>((reachable, created, listed, limited))
    }
    .await;

    drop_database(&url, &db_name).await;
    store.close().await;

    let (reachable, created, listed, limited) = outcome.expect("Store operation failed");
    assert!(reachable);
    let listed_ids: HashSet<Uuid> = listed.iter().map(StatusCheck::id).collect();
    assert_eq!(listed_ids, created);
    assert_eq!(limited.len(), 1);
}

#[test_log::test(tokio::test)]
async fn unreachable_server_fails_operations_without_failing_ping() {
    let store = MongoStore::connect(UNREACHABLE_URL, "unreachable")
        .await
        .expect("URI should parse");

    assert!(!store.ping().await);

    let inserted = store.insert_one(&new_record("acme")).await;
    assert!(
        matches!(inserted, Err(StoreError::Driver(_))),
        "{inserted:?}"
    );

    let listed = store.find_all(1000).await;
    assert!(matches!(listed, Err(StoreError::Driver(_))), "{listed:?}");

    store.close().await;
}
