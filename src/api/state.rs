//! API server state

use std::sync::Arc;

use crate::config::DatabaseSection;
use crate::store::PlantStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Document gateway shared across requests
    pub store: Arc<dyn PlantStore>,

    /// Whether a connection string was configured, for diagnostics
    pub database_url_set: bool,

    /// Whether a database name was configured, for diagnostics
    pub database_name_set: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn PlantStore>, database: &DatabaseSection) -> Self {
        Self {
            store,
            database_url_set: database.url.is_some(),
            database_name_set: database.name.is_some(),
        }
    }
}
