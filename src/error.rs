//! Error types for plantarium

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("database not configured")]
    DatabaseUnavailable,

    #[error("database error: {0}")]
    Database(String),

    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A single field-level validation failure, serialised into 422 bodies.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl Error {
    pub fn database(msg: impl Into<String>) -> Self {
        Error::Database(msg.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation(vec![FieldViolation {
            field: field.into(),
            message: message.into(),
        }])
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(err: mongodb::error::Error) -> Self {
        Error::Database(err.to_string())
    }
}
