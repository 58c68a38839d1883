//! Seed fallback for unconfigured deployments
//!
//! A demo affordance, not a cache: when no connection string is set the
//! list endpoint serves this fixed catalogue and writes are refused.

use async_trait::async_trait;

use crate::query::PlantFilter;
use crate::types::{CareLevel, LightLevel, Plant, PlantRecord, SizeClass, WaterNeed};
use crate::{Error, Result};

use super::{PlantStore, StoreStatus};

/// Read-only store serving [`seed_plants`].
pub struct SeedStore;

#[async_trait]
impl PlantStore for SeedStore {
    async fn list(&self, filter: &PlantFilter, limit: usize) -> Result<Vec<PlantRecord>> {
        Ok(seed_plants()
            .into_iter()
            .filter(|record| filter.matches(record))
            .take(limit)
            .collect())
    }

    async fn create(&self, _plant: Plant) -> Result<String> {
        Err(Error::DatabaseUnavailable)
    }

    async fn status(&self) -> StoreStatus {
        StoreStatus::Unconfigured
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    name: &str,
    scientific_name: &str,
    description: &str,
    image_url: &str,
    light: LightLevel,
    water: WaterNeed,
    care_level: CareLevel,
    pet_friendly: bool,
    size: SizeClass,
    tags: &[&str],
) -> PlantRecord {
    PlantRecord {
        id: None,
        plant: Plant {
            name: name.to_string(),
            scientific_name: Some(scientific_name.to_string()),
            description: Some(description.to_string()),
            image_url: Some(image_url.to_string()),
            light,
            water,
            care_level,
            pet_friendly,
            size,
            humidity: None,
            placement: None,
            growth_rate: None,
            ideal_temp_min_c: None,
            ideal_temp_max_c: None,
            price: None,
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        },
        created_at: None,
        updated_at: None,
    }
}

/// The curated demo catalogue.
pub fn seed_plants() -> Vec<PlantRecord> {
    vec![
        seed(
            "Monstera Deliciosa",
            "Monstera deliciosa",
            "Iconic split leaves, fast grower and forgiving.",
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop",
            LightLevel::Bright,
            WaterNeed::Moderate,
            CareLevel::Easy,
            false,
            SizeClass::Large,
            &["statement", "fast-growing"],
        ),
        seed(
            "Snake Plant",
            "Sansevieria trifasciata",
            "Thrives on neglect, great for low light.",
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=1200&auto=format&fit=crop",
            LightLevel::Low,
            WaterNeed::Low,
            CareLevel::Easy,
            false,
            SizeClass::Medium,
            &["air-purifier", "beginner"],
        ),
        seed(
            "ZZ Plant",
            "Zamioculcas zamiifolia",
            "Glossy leaves, tolerates low light and infrequent watering.",
            "https://images.unsplash.com/photo-1620916566398-579615a6df65?q=80&w=1200&auto=format&fit=crop",
            LightLevel::Low,
            WaterNeed::Low,
            CareLevel::Easy,
            false,
            SizeClass::Medium,
            &["hardy", "office"],
        ),
        seed(
            "Pothos",
            "Epipremnum aureum",
            "Vining plant that adapts to many conditions.",
            "https://images.unsplash.com/photo-1601482256584-5f934a95a204?q=80&w=1200&auto=format&fit=crop",
            LightLevel::Medium,
            WaterNeed::Moderate,
            CareLevel::Easy,
            false,
            SizeClass::Medium,
            &["trailing", "versatile"],
        ),
        seed(
            "Parlor Palm",
            "Chamaedorea elegans",
            "Pet-friendly palm that tolerates low light.",
            "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=1200&auto=format&fit=crop",
            LightLevel::Low,
            WaterNeed::Moderate,
            CareLevel::Moderate,
            true,
            SizeClass::Medium,
            &["pet-safe", "palm"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unfiltered_list_returns_the_full_catalogue() {
        let records = SeedStore.list(&PlantFilter::default(), 50).await.unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].plant.name, "Monstera Deliciosa");
        assert_eq!(records[0].plant.light, LightLevel::Bright);
        assert!(records[0].id.is_none());
    }

    #[tokio::test]
    async fn low_light_filter_selects_three_records() {
        let filter = PlantFilter {
            light: Some("low".to_string()),
            ..Default::default()
        };
        let records = SeedStore.list(&filter, 50).await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.plant.name.as_str()).collect();
        assert_eq!(names, vec!["Snake Plant", "ZZ Plant", "Parlor Palm"]);
    }

    #[tokio::test]
    async fn conjunction_narrows_to_the_parlor_palm() {
        let filter = PlantFilter {
            light: Some("low".to_string()),
            pet_friendly: Some(true),
            ..Default::default()
        };
        let records = SeedStore.list(&filter, 50).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].plant.name, "Parlor Palm");
    }

    #[tokio::test]
    async fn limit_truncates_the_catalogue() {
        let records = SeedStore.list(&PlantFilter::default(), 2).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].plant.name, "Snake Plant");
    }

    #[tokio::test]
    async fn writes_are_refused() {
        let plant: Plant = serde_json::from_value(serde_json::json!({
            "name": "Fiddle Leaf Fig",
            "light": "bright",
            "water": "moderate",
            "care_level": "advanced"
        }))
        .unwrap();

        match SeedStore.create(plant).await {
            Err(Error::DatabaseUnavailable) => {}
            other => panic!("expected DatabaseUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_reports_unconfigured() {
        assert!(matches!(SeedStore.status().await, StoreStatus::Unconfigured));
    }
}
