//! Shared test utilities for `TripBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test sessions, trips and catalog entries with sensible defaults.

use crate::{
    config::{
        Config,
        catalog::{ActivityConfig, CityConfig},
    },
    core::{catalog, trip},
    errors::Result,
    itinerary::{City, DateRange, NewTrip, Trip},
    session::Session,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test database with the catalog from [`test_catalog_config`] seeded.
pub async fn setup_with_catalog() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    catalog::seed_catalog(&db, &test_catalog_config()).await?;
    Ok(db)
}

/// Opens a session for `user_id`.
///
/// # Panics
/// Never for a non-empty id.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_session(user_id: &str) -> Session {
    Session::login(user_id, user_id).expect("test user ids are non-empty")
}

/// A city with no rating or price level.
#[must_use]
pub fn test_city(id: &str, name: &str, country: &str) -> City {
    City::new(id, name, country)
}

/// Trip input with sensible defaults.
///
/// # Defaults
/// * `dates`: 2024-06-15 to 2024-07-06 (22 days)
/// * `description`: empty
/// * `cover_image_url`: None
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_new_trip(name: &str) -> NewTrip {
    NewTrip {
        name: name.to_string(),
        description: String::new(),
        dates: DateRange::parse("2024-06-15", "2024-07-06").expect("fixed dates are valid"),
        cover_image_url: None,
    }
}

/// Creates and stores a trip with [`test_new_trip`] defaults.
pub async fn create_test_trip(
    db: &DatabaseConnection,
    session: &Session,
    name: &str,
) -> Result<Trip> {
    trip::create_trip(db, session, test_new_trip(name)).await
}

fn city(id: &str, name: &str, country: &str, rating: f64, price_level: u8) -> CityConfig {
    CityConfig {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        rating: Some(rating),
        price_level: Some(price_level),
    }
}

fn activity(
    id: &str,
    name: &str,
    category: &str,
    duration: &str,
    price: f64,
    location: &str,
) -> ActivityConfig {
    ActivityConfig {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        duration: Some(duration.to_string()),
        price: Some(price),
        location: Some(location.to_string()),
    }
}

/// Five European cities and six activities in Paris and Rome.
#[must_use]
pub fn test_catalog_config() -> Config {
    Config {
        cities: vec![
            city("paris", "Paris", "France", 4.8, 3),
            city("rome", "Rome", "Italy", 4.7, 2),
            city("barcelona", "Barcelona", "Spain", 4.6, 2),
            city("amsterdam", "Amsterdam", "Netherlands", 4.5, 3),
            city("berlin", "Berlin", "Germany", 4.4, 2),
        ],
        activities: vec![
            activity("a1", "Eiffel Tower Visit", "Sightseeing", "3 hours", 28.0, "Paris"),
            activity("a2", "Louvre Museum Tour", "Culture", "4 hours", 17.0, "Paris"),
            activity("a3", "Seine River Cruise", "Sightseeing", "1.5 hours", 15.0, "Paris"),
            activity("a4", "Montmartre Food Tour", "Food", "3 hours", 65.0, "Paris"),
            activity("a5", "Colosseum Tour", "Sightseeing", "3 hours", 22.0, "Rome"),
            activity("a6", "Vatican Museums", "Culture", "4 hours", 29.0, "Rome"),
        ],
        ..Config::default()
    }
}
