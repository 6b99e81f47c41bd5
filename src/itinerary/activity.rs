//! Catalog activities that stops reference by id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity category as shown in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Sightseeing,
    Food,
    Adventure,
    Culture,
    Shopping,
    Relaxation,
    Nightlife,
    /// Fallback for any label the catalog doesn't recognize
    Other,
}

impl ActivityCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 8] = [
        Self::Sightseeing,
        Self::Food,
        Self::Adventure,
        Self::Culture,
        Self::Shopping,
        Self::Relaxation,
        Self::Nightlife,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sightseeing => "sightseeing",
            Self::Food => "food",
            Self::Adventure => "adventure",
            Self::Culture => "culture",
            Self::Shopping => "shopping",
            Self::Relaxation => "relaxation",
            Self::Nightlife => "nightlife",
            Self::Other => "other",
        }
    }

    /// Case-insensitive parse; unknown labels become [`ActivityCategory::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// A plannable item from the catalog (a tour, a museum, a food crawl...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub category: ActivityCategory,
    /// Free-form duration label, e.g. "3 hours"
    pub duration: Option<String>,
    /// Non-negative price in the trip currency
    pub price: Option<f64>,
    /// Location label, usually a city name
    pub location: Option<String>,
}

impl Activity {
    /// Case-insensitive match on name or category label.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.category.as_str().contains(&query)
    }
}
