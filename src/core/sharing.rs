//! Sharing business logic - Public itineraries, likes and "copy to my trips".
//!
//! A public trip can be read by anyone who has its id, signed in or not. The
//! read-only projection never exposes edit operations. Private and missing
//! trips look the same from here.

use super::{
    catalog,
    trip::{ensure_owner, get_trip, save_trip},
};
use crate::{
    entities::trip,
    errors::{Error, Result},
    itinerary::{Activity, Budget, DateRange, Day, Trip, Visibility},
    session::Session,
};
use sea_orm::{prelude::*, sea_query::Expr};
use serde::Serialize;
use tracing::info;

/// Read-only view of a public trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedItinerary {
    pub trip_id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub cover_image_url: Option<String>,
    pub dates: DateRange,
    pub duration_days: i64,
    pub likes: u32,
    pub budget: Budget,
    pub stops: Vec<SharedStop>,
}

/// One stop of a shared itinerary, with its activities resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedStop {
    pub city_name: String,
    pub country: String,
    pub dates: Option<DateRange>,
    pub activities: Vec<Activity>,
    pub days: Vec<Day>,
}

/// Loads the public projection of a trip. `None` for private or missing trips.
pub async fn get_shared_itinerary(
    db: &DatabaseConnection,
    trip_id: Uuid,
) -> Result<Option<SharedItinerary>> {
    let Some(trip) = get_trip(db, trip_id).await? else {
        return Ok(None);
    };
    if !trip.is_public() {
        return Ok(None);
    }

    let mut stops = Vec::with_capacity(trip.stops().len());
    for stop in trip.stops() {
        stops.push(SharedStop {
            city_name: stop.city_name.clone(),
            country: stop.country.clone(),
            dates: stop.dates,
            activities: catalog::get_activities(db, &stop.activity_ids).await?,
            days: stop.days(),
        });
    }

    Ok(Some(SharedItinerary {
        trip_id: trip.id,
        owner_id: trip.owner_id.clone(),
        duration_days: trip.dates.duration_days(),
        name: trip.name,
        description: trip.description,
        cover_image_url: trip.cover_image_url,
        dates: trip.dates,
        likes: trip.likes,
        budget: trip.budget,
        stops,
    }))
}

/// Makes a trip public or private.
pub async fn set_visibility(
    db: &DatabaseConnection,
    session: &Session,
    trip_id: Uuid,
    visibility: Visibility,
) -> Result<Trip> {
    let mut trip = get_trip(db, trip_id)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;
    ensure_owner(session, &trip)?;

    trip.visibility = visibility;
    trip.updated_at = chrono::Utc::now();
    save_trip(db, session, &trip).await?;
    info!(%trip_id, ?visibility, "Changed trip visibility");
    Ok(trip)
}

/// Adds one like to a public trip and returns the new count.
///
/// The increment is a single `UPDATE ... SET likes = likes + 1`, so
/// concurrent likes are never lost.
pub async fn like_trip(db: &DatabaseConnection, trip_id: Uuid) -> Result<u32> {
    let is_public = trip::Entity::find_by_id(trip_id)
        .one(db)
        .await?
        .is_some_and(|row| row.is_public);
    if !is_public {
        return Err(Error::TripNotFound { id: trip_id });
    }

    trip::Entity::update_many()
        .col_expr(trip::Column::Likes, Expr::col(trip::Column::Likes).add(1))
        .filter(trip::Column::Id.eq(trip_id))
        .exec(db)
        .await?;

    let row = trip::Entity::find_by_id(trip_id)
        .one(db)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;
    Ok(u32::try_from(row.likes)?)
}

/// Copies a public trip (or one of the session user's own) into a new
/// private trip owned by the session user.
pub async fn copy_trip(db: &DatabaseConnection, session: &Session, trip_id: Uuid) -> Result<Trip> {
    let source = get_trip(db, trip_id)
        .await?
        .filter(|trip| trip.is_public() || session.owns(&trip.owner_id))
        .ok_or(Error::TripNotFound { id: trip_id })?;

    let copy = source.copy_for(&session.user_id);
    save_trip(db, session, &copy).await?;
    info!(source = %trip_id, copy = %copy.id, owner = %session.user_id, "Copied trip");
    Ok(copy)
}
