//! Core types for plantarium

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, FieldViolation};
use crate::Result;

/// Preferred light level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightLevel {
    Low,
    Medium,
    Bright,
}

impl LightLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightLevel::Low => "low",
            LightLevel::Medium => "medium",
            LightLevel::Bright => "bright",
        }
    }
}

/// Watering needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeed {
    Low,
    Moderate,
    High,
}

impl WaterNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterNeed::Low => "low",
            WaterNeed::Moderate => "moderate",
            WaterNeed::High => "high",
        }
    }
}

/// Overall care difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareLevel {
    Easy,
    Moderate,
    Advanced,
}

impl CareLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Easy => "easy",
            CareLevel::Moderate => "moderate",
            CareLevel::Advanced => "advanced",
        }
    }
}

/// Typical mature size indoors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

/// A houseplant catalogue entry as submitted by clients.
///
/// Identifier and timestamps are server-assigned; see [`PlantRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub light: LightLevel,
    pub water: WaterNeed,
    pub care_level: CareLevel,

    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub size: SizeClass,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_temp_min_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_temp_max_c: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Plant {
    /// Check the numeric bounds the deserialization layer cannot express.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if let Some(price) = self.price {
            if price < 0.0 {
                violations.push(FieldViolation {
                    field: "price".to_string(),
                    message: format!("must be non-negative, got {}", price),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(violations))
        }
    }
}

/// A stored plant as returned by the list endpoint.
///
/// The identifier is the driver's ObjectId rendered as a hex string;
/// timestamps serialise as RFC 3339 strings. Seed records carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub plant: Plant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
