//! API handlers

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::query::PlantFilter;
use crate::schema::plant_schema;
use crate::store::StoreStatus;
use crate::types::{Plant, PlantRecord};
use crate::{Error, Result};

/// Liveness message
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Plantarium backend is running".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Plant record schema, for external tooling introspection
pub async fn schema() -> Json<Value> {
    Json(json!({ "plant": plant_schema() }))
}

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub light: Option<String>,
    pub water: Option<String>,
    pub care_level: Option<String>,
    pub pet_friendly: Option<bool>,
    pub size: Option<String>,
    pub tag: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

/// List plants with optional filters and search
pub async fn list_plants(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PlantRecord>>> {
    let filter = PlantFilter {
        q: params.q,
        light: params.light,
        water: params.water,
        care_level: params.care_level,
        pet_friendly: params.pet_friendly,
        size: params.size,
        tag: params.tag,
    };

    let records = state.store.list(&filter, params.limit).await?;
    Ok(Json(records))
}

/// Create a plant record
pub async fn create_plant(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Plant>, JsonRejection>,
) -> Result<Json<CreateResponse>> {
    // Deserialization failures (missing fields, wrong types, unknown enum
    // literals) surface as 422 with the serde message attached to the body.
    let Json(plant) = payload
        .map_err(|rejection| Error::validation("body", rejection.body_text()))?;

    plant.validate()?;

    let id = state.store.create(plant).await?;
    Ok(Json(CreateResponse { id }))
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub id: String,
}

/// Datastore reachability and configuration, for operational troubleshooting
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not configured".to_string(),
        database_url: set_flag(state.database_url_set),
        database_name: set_flag(state.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.status().await {
        StoreStatus::Unconfigured => {}
        StoreStatus::Connected {
            database,
            collections,
        } => {
            response.database = format!("connected to '{}'", database);
            response.connection_status = "Connected".to_string();
            response.collections = collections;
        }
        StoreStatus::Degraded { database, message } => {
            response.database = format!("'{}' error: {}", database, message);
            response.connection_status = "Connected".to_string();
        }
    }

    Json(response)
}

fn set_flag(set: bool) -> String {
    if set { "set" } else { "not set" }.to_string()
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
