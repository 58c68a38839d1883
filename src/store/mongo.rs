//! MongoDB-backed document gateway

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::query::PlantFilter;
use crate::types::{Plant, PlantRecord};
use crate::{Error, Result};

use super::{PlantStore, StoreStatus, PLANT_COLLECTION};

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Collection names reported by the diagnostic endpoint are capped.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Driver error messages in diagnostics are truncated to this length.
const MAX_ERROR_CHARS: usize = 50;

/// Wire form of a stored plant.
#[derive(Debug, Serialize, Deserialize)]
struct PlantDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(flatten)]
    plant: Plant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl From<PlantDocument> for PlantRecord {
    fn from(document: PlantDocument) -> Self {
        PlantRecord {
            id: document.id.map(|oid| oid.to_hex()),
            plant: document.plant,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Gateway to a MongoDB database
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Parse the connection string and hand back a gateway.
    ///
    /// No ping is issued here: a configured-but-unreachable database still
    /// lets the service start, with errors surfacing per request and in
    /// the diagnostic endpoint.
    pub async fn connect(url: &str, database: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        Ok(Self {
            db: client.database(database),
        })
    }

    fn plants(&self) -> Collection<PlantDocument> {
        self.db.collection(PLANT_COLLECTION)
    }
}

#[async_trait]
impl PlantStore for MongoStore {
    async fn list(&self, filter: &PlantFilter, limit: usize) -> Result<Vec<PlantRecord>> {
        let mut cursor = self
            .plants()
            .find(filter.to_document())
            .limit(limit as i64)
            .await?;

        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(document.into());
        }
        Ok(records)
    }

    async fn create(&self, plant: Plant) -> Result<String> {
        let now = Utc::now();
        let document = PlantDocument {
            id: None,
            plant,
            created_at: Some(now),
            updated_at: Some(now),
        };

        let result = self.plants().insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| Error::database("insert did not return an object id"))
    }

    async fn status(&self) -> StoreStatus {
        let database = self.db.name().to_string();

        if let Err(err) = self.db.run_command(doc! { "ping": 1 }).await {
            return StoreStatus::Degraded {
                database,
                message: truncate(&err.to_string(), MAX_ERROR_CHARS),
            };
        }

        match self.db.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_REPORTED_COLLECTIONS);
                StoreStatus::Connected {
                    database,
                    collections,
                }
            }
            Err(err) => StoreStatus::Degraded {
                database,
                message: truncate(&err.to_string(), MAX_ERROR_CHARS),
            },
        }
    }
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 50), "short");
        let long = "x".repeat(80);
        assert_eq!(truncate(&long, 50).len(), 50);
    }

    #[test]
    fn document_round_trips_through_record() {
        let oid = ObjectId::new();
        let document = PlantDocument {
            id: Some(oid),
            plant: serde_json::from_value(serde_json::json!({
                "name": "Pothos",
                "light": "medium",
                "water": "moderate",
                "care_level": "easy"
            }))
            .unwrap(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        };

        let record: PlantRecord = document.into();
        assert_eq!(record.id.as_deref(), Some(oid.to_hex().as_str()));
        assert!(record.created_at.is_some());
    }
}
