//! Trip business logic - Create, read, update, delete and list trips.
//!
//! A trip is stored as one `trips` row plus its stops, each stop's activity
//! references and schedule entries. Saving always rewrites the whole aggregate
//! inside a single database transaction, so the last save of a trip wins and
//! readers never see half an itinerary. Trips are independent of each other;
//! nothing here locks across trips.

use crate::{
    config::PersistenceSettings,
    entities::{schedule_entry, stop, stop_activity, trip},
    errors::{Error, Result},
    itinerary::{
        Budget, DateRange, EntryKind, NewTrip, ScheduleEntry, Stop, Trip, TripFilter,
        TripSummary, TripUpdate, Visibility,
    },
    session::Session,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{NotSet, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Creates a new empty trip owned by the session user and stores it.
pub async fn create_trip(
    db: &DatabaseConnection,
    session: &Session,
    new_trip: NewTrip,
) -> Result<Trip> {
    let trip = Trip::new(&session.user_id, new_trip)?;
    save_trip(db, session, &trip).await?;
    info!(trip_id = %trip.id, owner = %trip.owner_id, "Created trip '{}'", trip.name);
    Ok(trip)
}

/// Loads a trip with all of its stops, or `None` if it doesn't exist.
///
/// No ownership check is made; callers decide who may see the result.
pub async fn get_trip<C>(db: &C, trip_id: Uuid) -> Result<Option<Trip>>
where
    C: ConnectionTrait,
{
    match trip::Entity::find_by_id(trip_id).one(db).await? {
        Some(row) => assemble_trip(db, row).await.map(Some),
        None => Ok(None),
    }
}

/// Loads a trip the session user owns.
pub async fn get_owned_trip(
    db: &DatabaseConnection,
    session: &Session,
    trip_id: Uuid,
) -> Result<Trip> {
    let trip = get_trip(db, trip_id)
        .await?
        .ok_or(Error::TripNotFound { id: trip_id })?;
    ensure_owner(session, &trip)?;
    Ok(trip)
}

/// Applies a partial update to a trip's own fields and stores it.
pub async fn update_trip(
    db: &DatabaseConnection,
    session: &Session,
    trip_id: Uuid,
    update: TripUpdate,
) -> Result<Trip> {
    let mut trip = get_owned_trip(db, session, trip_id).await?;
    trip.apply_update(update)?;
    save_trip(db, session, &trip).await?;
    info!(trip_id = %trip.id, "Updated trip");
    Ok(trip)
}

/// Stores the whole trip aggregate, replacing whatever was stored before.
///
/// The session user must own the trip, both as given and as stored.
pub async fn save_trip(db: &DatabaseConnection, session: &Session, trip: &Trip) -> Result<()> {
    ensure_owner(session, trip)?;

    let txn = db.begin().await?;

    let existing = trip::Entity::find_by_id(trip.id).one(&txn).await?;
    if let Some(stored) = &existing {
        if !session.owns(&stored.owner_id) {
            return Err(Error::NotOwner {
                trip_id: trip.id,
                user_id: session.user_id.clone(),
            });
        }
    }

    let mut row = trip_active_model(trip)?;
    if existing.is_some() {
        // Likes only change through `like_trip`'s atomic increment.
        row.likes = NotSet;
        row.update(&txn).await?;
        delete_stops(&txn, trip.id).await?;
    } else {
        row.insert(&txn).await?;
    }

    for stop in trip.stops() {
        insert_stop(&txn, trip.id, stop).await?;
    }

    txn.commit().await?;
    Ok(())
}

/// [`save_trip`] with retries on database failures.
///
/// Waits `retry_backoff` before the first retry and doubles the wait each
/// time. Ownership and validation errors are returned immediately. When every
/// attempt fails the result is [`Error::SaveFailed`], meant to be shown to the
/// user as a transient notice; the caller's in-memory trip is left as it is.
pub async fn save_trip_with_retry(
    db: &DatabaseConnection,
    session: &Session,
    trip: &Trip,
    settings: &PersistenceSettings,
) -> Result<()> {
    let attempts = settings.save_attempts.max(1);
    let mut delay = settings.retry_backoff();
    let mut attempt = 1;

    loop {
        match save_trip(db, session, trip).await {
            Ok(()) => return Ok(()),
            Err(Error::Database(e)) if attempt < attempts => {
                warn!(trip_id = %trip.id, attempt, "Saving trip failed, retrying: {e}");
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
            Err(Error::Database(e)) => {
                warn!(trip_id = %trip.id, attempt, "Saving trip failed, giving up: {e}");
                return Err(Error::SaveFailed {
                    trip_id: trip.id,
                    attempts: attempt,
                    message: e.to_string(),
                });
            }
            Err(other) => return Err(other),
        }
    }
}

/// Deletes a trip and everything it owns. Deleting a missing trip is a no-op.
pub async fn delete_trip(db: &DatabaseConnection, session: &Session, trip_id: Uuid) -> Result<()> {
    let txn = db.begin().await?;

    let Some(stored) = trip::Entity::find_by_id(trip_id).one(&txn).await? else {
        return Ok(());
    };
    if !session.owns(&stored.owner_id) {
        return Err(Error::NotOwner {
            trip_id,
            user_id: session.user_id.clone(),
        });
    }

    delete_stops(&txn, trip_id).await?;
    stored.delete(&txn).await?;

    txn.commit().await?;
    info!(%trip_id, "Deleted trip");
    Ok(())
}

/// Lists the session user's trips by start date, with today's status.
pub async fn list_trips(db: &DatabaseConnection, session: &Session) -> Result<Vec<TripSummary>> {
    search_trips(db, session, &TripFilter::default(), Utc::now().date_naive()).await
}

/// Lists the session user's trips matching `filter`, ordered by start date.
///
/// Status is computed relative to `today`.
pub async fn search_trips(
    db: &DatabaseConnection,
    session: &Session,
    filter: &TripFilter,
    today: NaiveDate,
) -> Result<Vec<TripSummary>> {
    let rows = trip::Entity::find()
        .filter(trip::Column::OwnerId.eq(session.user_id.as_str()))
        .order_by_asc(trip::Column::StartDate)
        .order_by_asc(trip::Column::CreatedAt)
        .all(db)
        .await?;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    // Summaries only need stop cities, so one query covers every trip.
    let trip_ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let stop_rows = stop::Entity::find()
        .filter(stop::Column::TripId.is_in(trip_ids))
        .order_by_asc(stop::Column::Position)
        .all(db)
        .await?;

    let mut summaries = Vec::with_capacity(rows.len());
    for row in rows {
        let stops = stop_rows
            .iter()
            .filter(|s| s.trip_id == row.id)
            .map(|s| stop_from_row(s.clone(), Vec::new(), Vec::new()))
            .collect::<Result<Vec<_>>>()?;
        let trip = trip_from_row(row, stops)?;
        let summary = TripSummary::of(&trip, today);
        if filter.matches(&summary) {
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

pub(crate) fn ensure_owner(session: &Session, trip: &Trip) -> Result<()> {
    if session.owns(&trip.owner_id) {
        Ok(())
    } else {
        Err(Error::NotOwner {
            trip_id: trip.id,
            user_id: session.user_id.clone(),
        })
    }
}

async fn assemble_trip<C>(db: &C, row: trip::Model) -> Result<Trip>
where
    C: ConnectionTrait,
{
    let stop_rows = stop::Entity::find()
        .filter(stop::Column::TripId.eq(row.id))
        .order_by_asc(stop::Column::Position)
        .all(db)
        .await?;
    let stop_ids: Vec<Uuid> = stop_rows.iter().map(|s| s.id).collect();

    let (activity_rows, entry_rows) = if stop_ids.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        let activity_rows = stop_activity::Entity::find()
            .filter(stop_activity::Column::StopId.is_in(stop_ids.clone()))
            .order_by_asc(stop_activity::Column::Position)
            .all(db)
            .await?;
        let entry_rows = schedule_entry::Entity::find()
            .filter(schedule_entry::Column::StopId.is_in(stop_ids))
            .order_by_asc(schedule_entry::Column::Position)
            .all(db)
            .await?;
        (activity_rows, entry_rows)
    };

    let mut stops = Vec::with_capacity(stop_rows.len());
    for stop_row in stop_rows {
        let activity_ids = activity_rows
            .iter()
            .filter(|a| a.stop_id == stop_row.id)
            .map(|a| a.activity_id.clone())
            .collect();
        let schedule = entry_rows
            .iter()
            .filter(|e| e.stop_id == stop_row.id)
            .map(|e| schedule_entry_from_row(e.clone()))
            .collect::<Result<Vec<_>>>()?;
        stops.push(stop_from_row(stop_row, activity_ids, schedule)?);
    }

    trip_from_row(row, stops)
}

fn trip_from_row(row: trip::Model, stops: Vec<Stop>) -> Result<Trip> {
    let mut trip = Trip {
        id: row.id,
        owner_id: row.owner_id,
        name: row.name,
        description: row.description,
        dates: DateRange::new(row.start_date, row.end_date)?,
        cover_image_url: row.cover_image_url,
        visibility: if row.is_public {
            Visibility::Public
        } else {
            Visibility::Private
        },
        budget: Budget {
            total: row.budget_total,
            spent: row.budget_spent,
            transport: row.budget_transport,
            accommodation: row.budget_accommodation,
            activities: row.budget_activities,
            food: row.budget_food,
            other: row.budget_other,
        },
        likes: u32::try_from(row.likes)?,
        created_at: row.created_at,
        updated_at: row.updated_at,
        stops,
    };
    trip.renumber();
    Ok(trip)
}

fn stop_from_row(
    row: stop::Model,
    activity_ids: Vec<String>,
    schedule: Vec<ScheduleEntry>,
) -> Result<Stop> {
    let dates = match (row.start_date, row.end_date) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
        _ => None,
    };
    Ok(Stop {
        id: row.id,
        position: u32::try_from(row.position)?,
        city_id: row.city_id,
        city_name: row.city_name,
        country: row.country,
        dates,
        activity_ids,
        expanded: row.is_expanded,
        schedule,
    })
}

fn schedule_entry_from_row(row: schedule_entry::Model) -> Result<ScheduleEntry> {
    Ok(ScheduleEntry {
        id: row.id,
        date: row.date,
        time: row.time,
        name: row.name,
        kind: EntryKind::parse(&row.kind)?,
        cost: row.cost,
    })
}

fn trip_active_model(trip: &Trip) -> Result<trip::ActiveModel> {
    Ok(trip::ActiveModel {
        id: Set(trip.id),
        owner_id: Set(trip.owner_id.clone()),
        name: Set(trip.name.clone()),
        description: Set(trip.description.clone()),
        start_date: Set(trip.dates.start()),
        end_date: Set(trip.dates.end()),
        cover_image_url: Set(trip.cover_image_url.clone()),
        is_public: Set(trip.is_public()),
        likes: Set(i32::try_from(trip.likes)?),
        budget_total: Set(trip.budget.total),
        budget_spent: Set(trip.budget.spent),
        budget_transport: Set(trip.budget.transport),
        budget_accommodation: Set(trip.budget.accommodation),
        budget_activities: Set(trip.budget.activities),
        budget_food: Set(trip.budget.food),
        budget_other: Set(trip.budget.other),
        created_at: Set(trip.created_at),
        updated_at: Set(trip.updated_at),
    })
}

async fn insert_stop<C>(db: &C, trip_id: Uuid, stop: &Stop) -> Result<()>
where
    C: ConnectionTrait,
{
    stop::ActiveModel {
        id: Set(stop.id),
        trip_id: Set(trip_id),
        position: Set(i32::try_from(stop.position)?),
        city_id: Set(stop.city_id.clone()),
        city_name: Set(stop.city_name.clone()),
        country: Set(stop.country.clone()),
        start_date: Set(stop.dates.map(|d| d.start())),
        end_date: Set(stop.dates.map(|d| d.end())),
        is_expanded: Set(stop.expanded),
    }
    .insert(db)
    .await?;

    for (position, activity_id) in stop.activity_ids.iter().enumerate() {
        stop_activity::ActiveModel {
            stop_id: Set(stop.id),
            activity_id: Set(activity_id.clone()),
            position: Set(i32::try_from(position)?),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for (position, entry) in stop.schedule.iter().enumerate() {
        schedule_entry::ActiveModel {
            id: Set(entry.id),
            stop_id: Set(stop.id),
            date: Set(entry.date),
            time: Set(entry.time),
            name: Set(entry.name.clone()),
            kind: Set(entry.kind.as_str().to_string()),
            cost: Set(entry.cost),
            position: Set(i32::try_from(position)?),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Removes a trip's stops with their activity references and schedules.
async fn delete_stops<C>(db: &C, trip_id: Uuid) -> Result<()>
where
    C: ConnectionTrait,
{
    let stop_ids: Vec<Uuid> = stop::Entity::find()
        .filter(stop::Column::TripId.eq(trip_id))
        .all(db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    if stop_ids.is_empty() {
        return Ok(());
    }

    stop_activity::Entity::delete_many()
        .filter(stop_activity::Column::StopId.is_in(stop_ids.clone()))
        .exec(db)
        .await?;
    schedule_entry::Entity::delete_many()
        .filter(schedule_entry::Column::StopId.is_in(stop_ids))
        .exec(db)
        .await?;
    stop::Entity::delete_many()
        .filter(stop::Column::TripId.eq(trip_id))
        .exec(db)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::itinerary::{DatePolicy, TripStatus, dates::parse_date, schedule::parse_time};
    use crate::test_utils::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_create_and_get_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");

        let created = create_test_trip(&db, &session, "European Adventure").await?;
        let loaded = get_trip(&db, created.id).await?.unwrap();

        assert_eq!(loaded.id, created.id);
        assert_eq!(loaded.owner_id, "user-1");
        assert_eq!(loaded.name, "European Adventure");
        assert_eq!(loaded.dates, created.dates);
        assert_eq!(loaded.visibility, Visibility::Private);
        assert!(loaded.stops().is_empty());

        assert!(get_trip(&db, Uuid::new_v4()).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_trip_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");

        let result = create_trip(
            &db,
            &session,
            NewTrip {
                name: "  ".to_string(),
                description: String::new(),
                dates: DateRange::parse("2024-06-15", "2024-06-20")?,
                cover_image_url: None,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert!(list_trips(&db, &session).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_round_trips_the_whole_itinerary() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");
        let mut trip = create_test_trip(&db, &session, "European Adventure").await?;

        let paris_id = trip.add_stop(&test_city("paris", "Paris", "France")).unwrap();
        let rome_id = trip.add_stop(&test_city("rome", "Rome", "Italy")).unwrap();
        trip.add_stop(&test_city("paris", "Paris", "France"));
        trip.add_activity(paris_id, "a2");
        trip.add_activity(paris_id, "a1");
        trip.set_stop_dates(
            paris_id,
            DateRange::parse("2024-06-15", "2024-06-20")?,
            DatePolicy::Permissive,
        )?;
        trip.toggle_expanded(rome_id);
        trip.add_schedule_entry(
            rome_id,
            ScheduleEntry::new(
                parse_date("2024-06-21")?,
                parse_time("8:00 AM")?,
                "Train to Rome",
                EntryKind::Transport,
                95.0,
            )?,
        );
        trip.budget = Budget::new(4500.0, 3200.0)?;
        save_trip(&db, &session, &trip).await?;

        let loaded = get_trip(&db, trip.id).await?.unwrap();
        assert_eq!(loaded.destinations(), vec!["Paris", "Rome"]);
        let paris = loaded.stop(paris_id).unwrap();
        assert_eq!(paris.activity_ids, vec!["a2", "a1"]);
        assert_eq!(paris.dates, Some(DateRange::parse("2024-06-15", "2024-06-20")?));
        assert!(paris.expanded);
        let rome = loaded.stop(rome_id).unwrap();
        assert!(!rome.expanded);
        assert!(rome.dates.is_none());
        assert_eq!(rome.schedule.len(), 1);
        assert_eq!(rome.schedule[0].kind, EntryKind::Transport);
        assert_eq!(rome.scheduled_cost(), 95.0);
        assert_eq!(loaded.budget.remaining(), 1300.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_last_save_wins() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");
        let trip = create_test_trip(&db, &session, "European Adventure").await?;

        let mut first = trip.clone();
        first.add_stop(&test_city("paris", "Paris", "France"));
        first.add_stop(&test_city("rome", "Rome", "Italy"));
        save_trip(&db, &session, &first).await?;

        let mut second = trip.clone();
        second.add_stop(&test_city("berlin", "Berlin", "Germany"));
        save_trip(&db, &session, &second).await?;

        let loaded = get_trip(&db, trip.id).await?.unwrap();
        assert_eq!(loaded.destinations(), vec!["Berlin"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_reordered_stops_are_persisted() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");
        let mut trip = create_test_trip(&db, &session, "European Adventure").await?;
        trip.add_stop(&test_city("paris", "Paris", "France"));
        trip.add_stop(&test_city("rome", "Rome", "Italy"));
        let barcelona_id = trip.add_stop(&test_city("barcelona", "Barcelona", "Spain")).unwrap();
        trip.move_stop(barcelona_id, 0);
        save_trip(&db, &session, &trip).await?;

        let loaded = get_trip(&db, trip.id).await?.unwrap();
        assert_eq!(loaded.destinations(), vec!["Barcelona", "Paris", "Rome"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");
        let trip = create_test_trip(&db, &session, "European Adventure").await?;

        let updated = update_trip(
            &db,
            &session,
            trip.id,
            TripUpdate {
                description: Some("Three weeks, three countries".to_string()),
                ..TripUpdate::default()
            },
        )
        .await?;
        assert_eq!(updated.description, "Three weeks, three countries");
        assert_eq!(updated.name, "European Adventure");

        let loaded = get_trip(&db, trip.id).await?.unwrap();
        assert_eq!(loaded.description, "Three weeks, three countries");

        let missing = update_trip(&db, &session, Uuid::new_v4(), TripUpdate::default()).await;
        assert!(matches!(missing, Err(Error::TripNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_other_users_cannot_modify() -> Result<()> {
        let db = setup_test_db().await?;
        let owner = test_session("owner");
        let stranger = test_session("stranger");
        let trip = create_test_trip(&db, &owner, "European Adventure").await?;

        let update = update_trip(&db, &stranger, trip.id, TripUpdate::default()).await;
        assert!(matches!(update, Err(Error::NotOwner { .. })));

        let save = save_trip(&db, &stranger, &trip).await;
        assert!(matches!(save, Err(Error::NotOwner { .. })));

        // Re-labelling the owner in memory doesn't take over the stored trip
        let mut hijacked = trip.clone();
        hijacked.owner_id = "stranger".to_string();
        let save = save_trip(&db, &stranger, &hijacked).await;
        assert!(matches!(save, Err(Error::NotOwner { .. })));

        let delete = delete_trip(&db, &stranger, trip.id).await;
        assert!(matches!(delete, Err(Error::NotOwner { .. })));
        assert!(get_trip(&db, trip.id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_trip_removes_stops_and_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");
        let mut trip = create_test_trip(&db, &session, "European Adventure").await?;
        let paris_id = trip.add_stop(&test_city("paris", "Paris", "France")).unwrap();
        trip.add_activity(paris_id, "a1");
        save_trip(&db, &session, &trip).await?;

        delete_trip(&db, &session, trip.id).await?;
        assert!(get_trip(&db, trip.id).await?.is_none());
        assert!(stop::Entity::find().all(&db).await?.is_empty());
        assert!(stop_activity::Entity::find().all(&db).await?.is_empty());

        delete_trip(&db, &session, trip.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_list_and_search_trips() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");
        let other = test_session("user-2");

        let mut europe = create_test_trip(&db, &session, "European Adventure").await?;
        europe.add_stop(&test_city("rome", "Rome", "Italy"));
        save_trip(&db, &session, &europe).await?;

        create_trip(
            &db,
            &session,
            NewTrip {
                name: "Japan Cherry Blossoms".to_string(),
                description: "Temples and modern cities".to_string(),
                dates: DateRange::parse("2024-04-01", "2024-04-14")?,
                cover_image_url: None,
            },
        )
        .await?;
        create_test_trip(&db, &other, "Someone Else's Trip").await?;

        let today = parse_date("2024-04-05")?;
        let all = search_trips(&db, &session, &TripFilter::default(), today).await?;
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Japan Cherry Blossoms", "European Adventure"]);
        assert_eq!(all[0].status, TripStatus::Ongoing);
        assert_eq!(all[1].status, TripStatus::Upcoming);

        let by_city = TripFilter {
            query: Some("rome".to_string()),
            status: None,
        };
        let found = search_trips(&db, &session, &by_city, today).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, europe.id);

        let ongoing = TripFilter {
            query: None,
            status: Some(TripStatus::Ongoing),
        };
        let found = search_trips(&db, &session, &ongoing, today).await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Japan Cherry Blossoms");

        assert_eq!(list_trips(&db, &other).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_keeps_each_trips_stops_apart() -> Result<()> {
        let db = setup_test_db().await?;
        let session = test_session("user-1");

        let mut europe = create_test_trip(&db, &session, "European Adventure").await?;
        europe.add_stop(&test_city("paris", "Paris", "France"));
        let rome_id = europe
            .add_stop(&test_city("rome", "Rome", "Italy"))
            .unwrap();
        assert!(europe.move_stop(rome_id, 0));
        europe.budget = Budget::new(4500.0, 3200.0)?;
        save_trip(&db, &session, &europe).await?;

        let mut spain = create_test_trip(&db, &session, "Spanish Summer").await?;
        spain.add_stop(&test_city("barcelona", "Barcelona", "Spain"));
        save_trip(&db, &session, &spain).await?;

        create_test_trip(&db, &session, "Undecided").await?;

        let summaries = list_trips(&db, &session).await?;
        assert_eq!(summaries.len(), 3);
        let by_name = |name: &str| summaries.iter().find(|s| s.name == name).unwrap();
        assert_eq!(by_name("European Adventure").destinations, vec!["Rome", "Paris"]);
        assert_eq!(by_name("European Adventure").estimated_budget, 4500.0);
        assert_eq!(by_name("Spanish Summer").destinations, vec!["Barcelona"]);
        assert!(by_name("Undecided").destinations.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_with_retry_gives_up_with_save_failed() -> Result<()> {
        // No tables: every attempt hits a database error
        let db = Database::connect("sqlite::memory:").await?;
        let session = test_session("user-1");
        let trip = Trip::new(&session.user_id, test_new_trip("European Adventure"))?;
        let settings = PersistenceSettings {
            save_attempts: 3,
            retry_backoff_ms: 1,
        };

        let result = save_trip_with_retry(&db, &session, &trip, &settings).await;
        match result {
            Err(Error::SaveFailed { trip_id, attempts, .. }) => {
                assert_eq!(trip_id, trip.id);
                assert_eq!(attempts, 3);
            }
            other => panic!("expected SaveFailed, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_save_with_retry_does_not_retry_ownership_errors() -> Result<()> {
        let db = setup_test_db().await?;
        let owner = test_session("owner");
        let stranger = test_session("stranger");
        let trip = create_test_trip(&db, &owner, "European Adventure").await?;

        let result =
            save_trip_with_retry(&db, &stranger, &trip, &PersistenceSettings::default()).await;
        assert!(matches!(result, Err(Error::NotOwner { .. })));

        save_trip_with_retry(&db, &owner, &trip, &PersistenceSettings::default()).await?;
        Ok(())
    }
}
