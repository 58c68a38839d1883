//! HTTP API server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::Error;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/schema", get(handlers::schema))
        .route(
            "/plants",
            get(handlers::list_plants).post(handlers::create_plant),
        )
        .route("/test", get(handlers::test_database))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::DatabaseUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "detail": "Database not configured" }),
            ),
            Error::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": violations }),
            ),
            Error::Database(message) => {
                tracing::error!(error = %message, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "internal server error" }),
                )
            }
            Error::Serialization(err) => {
                tracing::error!(error = %err, "serialization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
