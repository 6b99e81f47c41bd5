//! Stop entity - One city leg of a trip.
//!
//! The city is denormalized (`city_id`, `city_name`, `country`) so a stop still
//! renders if the catalog entry changes. `position` gives the itinerary order.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stop database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stops")]
pub struct Model {
    /// Unique identifier for the stop
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// ID of the trip this stop belongs to
    pub trip_id: Uuid,
    /// Zero-based order within the trip
    pub position: i32,
    /// Catalog city id
    pub city_id: String,
    /// City name at the time the stop was added
    pub city_name: String,
    /// Country of the city
    pub country: String,
    /// First day at this stop, if chosen
    pub start_date: Option<Date>,
    /// Last day at this stop, if chosen
    pub end_date: Option<Date>,
    /// Whether the stop card is expanded in the builder
    pub is_expanded: bool,
}

/// Defines relationships between Stop and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each stop belongs to one trip
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id"
    )]
    Trip,
    /// One stop references many catalog activities
    #[sea_orm(has_many = "super::stop_activity::Entity")]
    StopActivities,
    /// One stop has many schedule entries
    #[sea_orm(has_many = "super::schedule_entry::Entity")]
    ScheduleEntries,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl Related<super::stop_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StopActivities.def()
    }
}

impl Related<super::schedule_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
