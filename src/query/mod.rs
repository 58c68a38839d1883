//! Filter builder for the plant collection
//!
//! A [`PlantFilter`] is the conjunction of whatever criteria the client
//! supplied: a record matches only if it satisfies every present field.
//! The free-text criterion is a disjunction over name, scientific name and
//! description. The same filter renders two ways: a BSON document for the
//! MongoDB driver and an in-memory predicate for the seed fallback.

use mongodb::bson::{doc, Document};

use crate::types::PlantRecord;

/// Optional criteria parsed from the list endpoint's query string.
///
/// `None` and the empty string both impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct PlantFilter {
    pub q: Option<String>,
    pub light: Option<String>,
    pub water: Option<String>,
    pub care_level: Option<String>,
    pub pet_friendly: Option<bool>,
    pub size: Option<String>,
    pub tag: Option<String>,
}

/// Fields searched by the free-text criterion.
const TEXT_FIELDS: [&str; 3] = ["name", "scientific_name", "description"];

impl PlantFilter {
    pub fn is_empty(&self) -> bool {
        non_empty(&self.q).is_none()
            && non_empty(&self.light).is_none()
            && non_empty(&self.water).is_none()
            && non_empty(&self.care_level).is_none()
            && self.pet_friendly.is_none()
            && non_empty(&self.size).is_none()
            && non_empty(&self.tag).is_none()
    }

    /// Render the filter as a MongoDB query document.
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {};

        if let Some(q) = non_empty(&self.q) {
            let pattern = escape_regex(q);
            let clauses: Vec<Document> = TEXT_FIELDS
                .iter()
                .map(|field| doc! { *field: { "$regex": &pattern, "$options": "i" } })
                .collect();
            filter.insert("$or", clauses);
        }
        if let Some(light) = non_empty(&self.light) {
            filter.insert("light", light);
        }
        if let Some(water) = non_empty(&self.water) {
            filter.insert("water", water);
        }
        if let Some(care_level) = non_empty(&self.care_level) {
            filter.insert("care_level", care_level);
        }
        if let Some(pet_friendly) = self.pet_friendly {
            filter.insert("pet_friendly", pet_friendly);
        }
        if let Some(size) = non_empty(&self.size) {
            filter.insert("size", size);
        }
        if let Some(tag) = non_empty(&self.tag) {
            filter.insert("tags", doc! { "$in": [tag] });
        }

        filter
    }

    /// Evaluate the filter against a record in memory.
    ///
    /// Must agree with [`PlantFilter::to_document`]: this is the predicate
    /// the seed fallback applies in place of the driver.
    pub fn matches(&self, record: &PlantRecord) -> bool {
        let plant = &record.plant;

        if let Some(q) = non_empty(&self.q) {
            let needle = q.to_lowercase();
            let haystacks = [
                Some(plant.name.as_str()),
                plant.scientific_name.as_deref(),
                plant.description.as_deref(),
            ];
            let hit = haystacks
                .iter()
                .flatten()
                .any(|text| text.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if let Some(light) = non_empty(&self.light) {
            if plant.light.as_str() != light {
                return false;
            }
        }
        if let Some(water) = non_empty(&self.water) {
            if plant.water.as_str() != water {
                return false;
            }
        }
        if let Some(care_level) = non_empty(&self.care_level) {
            if plant.care_level.as_str() != care_level {
                return false;
            }
        }
        if let Some(pet_friendly) = self.pet_friendly {
            if plant.pet_friendly != pet_friendly {
                return false;
            }
        }
        if let Some(size) = non_empty(&self.size) {
            if plant.size.as_str() != size {
                return false;
            }
        }
        if let Some(tag) = non_empty(&self.tag) {
            let tagged = plant
                .tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == tag));
            if !tagged {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Escape regex metacharacters so free text matches as a literal substring.
fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CareLevel, LightLevel, Plant, PlantRecord, SizeClass, WaterNeed};

    fn record(name: &str, scientific: &str, description: &str) -> PlantRecord {
        PlantRecord {
            id: None,
            plant: Plant {
                name: name.to_string(),
                scientific_name: Some(scientific.to_string()),
                description: Some(description.to_string()),
                image_url: None,
                light: LightLevel::Bright,
                water: WaterNeed::Moderate,
                care_level: CareLevel::Easy,
                pet_friendly: false,
                size: SizeClass::Large,
                humidity: None,
                placement: None,
                growth_rate: None,
                ideal_temp_min_c: None,
                ideal_temp_max_c: None,
                price: None,
                tags: Some(vec!["statement".to_string(), "fast-growing".to_string()]),
            },
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = PlantFilter::default();
        assert!(filter.is_empty());
        assert!(filter.to_document().is_empty());
        assert!(filter.matches(&record("Monstera Deliciosa", "Monstera deliciosa", "Iconic")));
    }

    #[test]
    fn empty_string_parameters_impose_no_constraint() {
        let filter = PlantFilter {
            q: Some(String::new()),
            light: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert!(filter.to_document().is_empty());
        assert!(filter.matches(&record("ZZ Plant", "Zamioculcas zamiifolia", "Glossy")));
    }

    #[test]
    fn free_text_is_case_insensitive_across_three_fields() {
        let rec = record(
            "Monstera Deliciosa",
            "Monstera deliciosa",
            "Iconic split leaves, fast grower and forgiving.",
        );

        for q in ["monstera", "DELICIOSA", "split LEAVES"] {
            let filter = PlantFilter {
                q: Some(q.to_string()),
                ..Default::default()
            };
            assert!(filter.matches(&rec), "expected {:?} to match", q);
        }

        let filter = PlantFilter {
            q: Some("fern".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&rec));
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let rec = record("Monstera Deliciosa", "Monstera deliciosa", "Iconic");

        let filter = PlantFilter {
            light: Some("bright".to_string()),
            care_level: Some("easy".to_string()),
            pet_friendly: Some(false),
            ..Default::default()
        };
        assert!(filter.matches(&rec));

        // One failing criterion sinks the whole filter.
        let filter = PlantFilter {
            light: Some("bright".to_string()),
            pet_friendly: Some(true),
            ..Default::default()
        };
        assert!(!filter.matches(&rec));
    }

    #[test]
    fn tag_requires_membership() {
        let rec = record("Monstera Deliciosa", "Monstera deliciosa", "Iconic");

        let filter = PlantFilter {
            tag: Some("statement".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&rec));

        let filter = PlantFilter {
            tag: Some("pet-safe".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&rec));

        let mut untagged = record("Cactus", "Cactaceae", "Spiky");
        untagged.plant.tags = None;
        let filter = PlantFilter {
            tag: Some("statement".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&untagged));
    }

    #[test]
    fn unknown_enum_value_matches_nothing() {
        let rec = record("Pothos", "Epipremnum aureum", "Vining");
        let filter = PlantFilter {
            light: Some("banana".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&rec));
    }

    #[test]
    fn document_shape_for_the_driver() {
        let filter = PlantFilter {
            q: Some("palm".to_string()),
            light: Some("low".to_string()),
            pet_friendly: Some(true),
            tag: Some("pet-safe".to_string()),
            ..Default::default()
        };
        let document = filter.to_document();

        let or = document.get_array("$or").unwrap();
        assert_eq!(or.len(), 3);
        let first = or[0].as_document().unwrap();
        let name = first.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "palm");
        assert_eq!(name.get_str("$options").unwrap(), "i");

        assert_eq!(document.get_str("light").unwrap(), "low");
        assert!(document.get_bool("pet_friendly").unwrap());
        let tags = document.get_document("tags").unwrap();
        assert_eq!(tags.get_array("$in").unwrap().len(), 1);
    }

    #[test]
    fn free_text_metacharacters_are_literal() {
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("plain"), "plain");

        let filter = PlantFilter {
            q: Some("c.ctus".to_string()),
            ..Default::default()
        };
        // Would match "cactus" under regex semantics; must not as a substring.
        assert!(!filter.matches(&record("Cactus", "Cactaceae", "Spiky")));
    }
}
