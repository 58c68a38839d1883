//! Document gateway
//!
//! Thin abstraction over datastore read/write operations. The service runs
//! against MongoDB when a connection string is configured and falls back to
//! a fixed seed list for reads otherwise.

use async_trait::async_trait;

use crate::query::PlantFilter;
use crate::types::{Plant, PlantRecord};
use crate::Result;

pub mod mongo;
pub mod seed;

/// Name of the backing collection.
pub const PLANT_COLLECTION: &str = "plant";

/// Gateway trait over the plant collection
#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Return up to `limit` records matching `filter`, in natural order.
    async fn list(&self, filter: &PlantFilter, limit: usize) -> Result<Vec<PlantRecord>>;

    /// Validate upstream; persist with a generated identifier and
    /// server-assigned timestamps. Returns the identifier.
    async fn create(&self, plant: Plant) -> Result<String>;

    /// Reachability report for the diagnostic endpoint.
    async fn status(&self) -> StoreStatus;
}

/// Store configuration resolved from [`crate::config::AppConfig`].
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Mongo { url: String, database: String },
    Seed,
}

/// Create a store backend from config
pub async fn create_store(config: StoreConfig) -> Result<Box<dyn PlantStore>> {
    match config {
        StoreConfig::Mongo { url, database } => {
            let backend = mongo::MongoStore::connect(&url, &database).await?;
            Ok(Box::new(backend))
        }
        StoreConfig::Seed => Ok(Box::new(seed::SeedStore)),
    }
}

/// Datastore reachability as observed by the diagnostic endpoint.
#[derive(Debug, Clone)]
pub enum StoreStatus {
    /// No connection string configured; the seed fallback is serving reads.
    Unconfigured,
    /// Ping and collection listing both succeeded.
    Connected {
        database: String,
        collections: Vec<String>,
    },
    /// The driver is configured but an operation failed.
    Degraded { database: String, message: String },
}
