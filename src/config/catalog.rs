//! Catalog seed loading from config.toml
//!
//! The `[[cities]]` and `[[activities]]` tables in config.toml seed the
//! catalog on first run or when entries are missing.

use crate::itinerary::{Activity, ActivityCategory, City};
use serde::Deserialize;

/// Configuration for a single catalog city
#[derive(Debug, Deserialize, Clone)]
pub struct CityConfig {
    /// Catalog id (e.g., "paris")
    pub id: String,
    /// City name
    pub name: String,
    /// Country name
    pub country: String,
    /// Average rating, 0-5
    #[serde(default)]
    pub rating: Option<f64>,
    /// Relative cost, 1-4
    #[serde(default)]
    pub price_level: Option<u8>,
}

/// Configuration for a single catalog activity
#[derive(Debug, Deserialize, Clone)]
pub struct ActivityConfig {
    /// Catalog id (e.g., "a1")
    pub id: String,
    /// Activity name
    pub name: String,
    /// Category label; unknown labels become "other"
    pub category: String,
    /// Free-form duration (e.g., "3 hours")
    #[serde(default)]
    pub duration: Option<String>,
    /// Price in the catalog currency
    #[serde(default)]
    pub price: Option<f64>,
    /// Location label
    #[serde(default)]
    pub location: Option<String>,
}

impl From<CityConfig> for City {
    fn from(config: CityConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            country: config.country,
            rating: config.rating,
            price_level: config.price_level,
        }
    }
}

impl From<ActivityConfig> for Activity {
    fn from(config: ActivityConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            category: ActivityCategory::from_label(&config.category),
            duration: config.duration,
            price: config.price,
            location: config.location,
        }
    }
}
