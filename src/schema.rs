//! JSON Schema for the plant collection
//!
//! Served by `GET /schema` so external tooling (UI, database viewers) can
//! introspect the record shape without reading this crate.

use serde_json::{json, Value};

/// JSON Schema describing a [`crate::types::Plant`].
///
/// Kept in lockstep with the serde definitions in `types.rs`; the enum
/// literal sets and the price bound here are the contract clients see.
pub fn plant_schema() -> Value {
    json!({
        "title": "Plant",
        "description": "Houseplant catalogue record",
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Common name" },
            "scientific_name": { "type": ["string", "null"], "description": "Botanical name" },
            "description": { "type": ["string", "null"], "description": "Short description and care notes" },
            "image_url": { "type": ["string", "null"], "description": "Image URL" },
            "light": {
                "type": "string",
                "enum": ["low", "medium", "bright"],
                "description": "Preferred light level"
            },
            "water": {
                "type": "string",
                "enum": ["low", "moderate", "high"],
                "description": "Watering needs"
            },
            "care_level": {
                "type": "string",
                "enum": ["easy", "moderate", "advanced"],
                "description": "Overall difficulty"
            },
            "pet_friendly": { "type": "boolean", "default": false, "description": "Safe for pets" },
            "size": {
                "type": "string",
                "enum": ["small", "medium", "large"],
                "default": "medium",
                "description": "Typical mature size indoors"
            },
            "humidity": { "type": ["string", "null"], "description": "Humidity preference" },
            "placement": { "type": ["string", "null"], "description": "Best placement e.g., north window" },
            "growth_rate": { "type": ["string", "null"], "description": "Slow / Moderate / Fast" },
            "ideal_temp_min_c": { "type": ["number", "null"], "description": "Min ideal temp in C" },
            "ideal_temp_max_c": { "type": ["number", "null"], "description": "Max ideal temp in C" },
            "price": {
                "type": ["number", "null"],
                "minimum": 0.0,
                "description": "Typical price in dollars"
            },
            "tags": {
                "type": ["array", "null"],
                "items": { "type": "string" },
                "description": "Extra labels for filtering"
            }
        },
        "required": ["name", "light", "water", "care_level"]
    })
}
