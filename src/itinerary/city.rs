//! Catalog cities that stops are anchored to.

use serde::{Deserialize, Serialize};

/// A destination city from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Average visitor rating, 0-5
    pub rating: Option<f64>,
    /// Relative cost of visiting, 1 (cheap) to 4 (expensive)
    pub price_level: Option<u8>,
}

impl City {
    /// Convenience constructor for a city without rating or price level.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            rating: None,
            price_level: None,
        }
    }

    /// Case-insensitive match on city name or country.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.country.to_lowercase().contains(&query)
    }
}
