//! Plantarium - a houseplant catalogue HTTP service
//!
//! Plantarium exposes a single queryable collection of houseplants:
//! - Conjunctive filtering over light, water, care level, size, tags
//!   and free-text search
//! - Document creation with schema validation
//! - JSON Schema introspection for external tooling
//! - MongoDB persistence with an in-memory seed fallback for demos

pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod schema;
pub mod store;
pub mod types;

pub use error::{Error, Result};
