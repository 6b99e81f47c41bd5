//! Catalog business logic - City and activity search, lookups and seeding.
//!
//! The catalog is the source of everything a traveller can pick. Stops only
//! hold catalog ids; this module resolves them back into full entries. Search
//! is a case-insensitive substring match, like the builder's search boxes.

use crate::{
    config::Config,
    entities::{activity, city},
    errors::Result,
    itinerary::{Activity, ActivityCategory, City},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::collections::HashMap;
use tracing::info;

/// Finds cities whose name or country contains `query`, ordered by name.
///
/// Uses [`City::matches`]: `%` and `_` are plain characters and case folding
/// covers non-ASCII names. An empty query returns the whole catalog.
pub async fn search_cities(db: &DatabaseConnection, query: &str) -> Result<Vec<City>> {
    let cities = city::Entity::find()
        .order_by_asc(city::Column::Name)
        .all(db)
        .await?;
    Ok(cities
        .into_iter()
        .map(City::from)
        .filter(|city| city.matches(query))
        .collect())
}

/// Finds activities whose name or category contains `query`, ordered by name.
///
/// `location` restricts results to activities at that location label.
pub async fn search_activities(
    db: &DatabaseConnection,
    query: &str,
    location: Option<&str>,
) -> Result<Vec<Activity>> {
    let mut select = activity::Entity::find();
    if let Some(location) = location.map(str::trim).filter(|l| !l.is_empty()) {
        select = select.filter(activity::Column::Location.eq(location));
    }

    let activities = select.order_by_asc(activity::Column::Name).all(db).await?;
    Ok(activities
        .into_iter()
        .map(Activity::from)
        .filter(|activity| activity.matches(query))
        .collect())
}

/// Looks up a single city by catalog id.
pub async fn get_city(db: &DatabaseConnection, city_id: &str) -> Result<Option<City>> {
    Ok(city::Entity::find_by_id(city_id.to_string())
        .one(db)
        .await?
        .map(City::from))
}

/// Looks up a single activity by catalog id.
pub async fn get_activity(db: &DatabaseConnection, activity_id: &str) -> Result<Option<Activity>> {
    Ok(activity::Entity::find_by_id(activity_id.to_string())
        .one(db)
        .await?
        .map(Activity::from))
}

/// Resolves activity references in the order given.
///
/// Ids the catalog doesn't know are skipped rather than reported; a stop
/// may outlive a catalog entry.
pub async fn get_activities<C>(db: &C, activity_ids: &[String]) -> Result<Vec<Activity>>
where
    C: ConnectionTrait,
{
    if activity_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_id: HashMap<String, Activity> = activity::Entity::find()
        .filter(activity::Column::Id.is_in(activity_ids.iter().cloned()))
        .all(db)
        .await?
        .into_iter()
        .map(|model| (model.id.clone(), Activity::from(model)))
        .collect();

    Ok(activity_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect())
}

/// Seeds the catalog from configuration, skipping ids that already exist.
///
/// Returns how many cities and activities were inserted.
pub async fn seed_catalog(db: &DatabaseConnection, config: &Config) -> Result<(usize, usize)> {
    let mut cities_added = 0;
    for city_config in &config.cities {
        if city::Entity::find_by_id(city_config.id.clone())
            .one(db)
            .await?
            .is_some()
        {
            continue;
        }
        let city = City::from(city_config.clone());
        city::ActiveModel {
            id: Set(city.id),
            name: Set(city.name),
            country: Set(city.country),
            rating: Set(city.rating),
            price_level: Set(city.price_level.map(i32::from)),
        }
        .insert(db)
        .await?;
        cities_added += 1;
    }

    let mut activities_added = 0;
    for activity_config in &config.activities {
        if activity::Entity::find_by_id(activity_config.id.clone())
            .one(db)
            .await?
            .is_some()
        {
            continue;
        }
        let activity = Activity::from(activity_config.clone());
        activity::ActiveModel {
            id: Set(activity.id),
            name: Set(activity.name),
            category: Set(activity.category.as_str().to_string()),
            duration: Set(activity.duration),
            price: Set(activity.price),
            location: Set(activity.location),
        }
        .insert(db)
        .await?;
        activities_added += 1;
    }

    info!("Seeded {cities_added} cities and {activities_added} activities into the catalog");
    Ok((cities_added, activities_added))
}

impl From<city::Model> for City {
    fn from(model: city::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
            rating: model.rating,
            price_level: model.price_level.and_then(|level| u8::try_from(level).ok()),
        }
    }
}

impl From<activity::Model> for Activity {
    fn from(model: activity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category: ActivityCategory::from_label(&model.category),
            duration: model.duration,
            price: model.price,
            location: model.location,
        }
    }
}
