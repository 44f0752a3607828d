//! # Status Check Records
//!
//! Append-only records capturing a client identifier and the moment the record
//! was created. Identifiers and timestamps are always assigned server-side.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a status check
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatusCheckCreate {
    #[validate(length(min = 1, message = "client_name must not be empty"))]
    pub client_name: String,
}

/// A persisted status check.
///
/// Fields are read-only from outside the crate; new records come from
/// [`StatusCheck::new`], which fixes the generated `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    id: Uuid,
    client_name: String,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

impl StatusCheck {
    /// Creates a new record with a random v4 id stamped with the current UTC time.
    pub fn new(input: StatusCheckCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: input.client_name,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Reassembles a record that was previously persisted.
    pub fn from_parts(id: Uuid, client_name: String, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            client_name,
            timestamp,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::{Duration, UtcOffset};

    use super::*;

    fn create(name: &str) -> StatusCheckCreate {
        StatusCheckCreate {
            client_name: name.to_string(),
        }
    }

    #[test]
    fn new_assigns_id_and_utc_timestamp() {
        let before = OffsetDateTime::now_utc();
        let check = StatusCheck::new(create("acme"));
        let after = OffsetDateTime::now_utc();

        assert_eq!(check.client_name(), "acme");
        assert_eq!(check.id().get_version_num(), 4);
        assert_eq!(check.timestamp().offset(), UtcOffset::UTC);
        assert!(check.timestamp() >= before && check.timestamp() <= after);
    }

    #[test]
    fn ids_are_unique_and_timestamps_non_decreasing() {
        let first = StatusCheck::new(create("acme"));
        let second = StatusCheck::new(create("acme"));

        assert_ne!(first.id(), second.id());
        assert!(second.timestamp() >= first.timestamp());
    }

    #[test]
    fn serializes_to_flat_json() {
        let timestamp = OffsetDateTime::UNIX_EPOCH + Duration::days(20_000);
        let id = Uuid::new_v4();
        let check = StatusCheck::from_parts(id, "acme".to_string(), timestamp);

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(
            value,
            json!({
                "id": id.to_string(),
                "client_name": "acme",
                "timestamp": "2024-10-04T00:00:00Z",
            })
        );
        assert_eq!(value["id"].as_str().unwrap().len(), 36);
    }

    #[test]
    fn empty_client_name_is_rejected() {
        assert!(create("").validate().is_err());
        assert!(create("acme").validate().is_ok());
    }
}
