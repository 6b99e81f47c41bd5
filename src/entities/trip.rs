//! Trip entity - One row per trip, with the budget summary flattened into columns.
//!
//! Stops live in their own table and point back here through `trip_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Trip database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    /// Unique identifier for the trip
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// User id of the owner (from the session)
    pub owner_id: String,
    /// Human-readable trip name (e.g., "European Adventure")
    pub name: String,
    /// Free-form description
    pub description: String,
    /// First day of the trip
    pub start_date: Date,
    /// Last day of the trip (inclusive)
    pub end_date: Date,
    /// Optional cover image URL
    pub cover_image_url: Option<String>,
    /// Whether the trip can be viewed through the sharing surface
    pub is_public: bool,
    /// Like counter shown on shared itineraries
    pub likes: i32,
    /// Overall budget
    pub budget_total: f64,
    /// Amount already spent
    pub budget_spent: f64,
    /// Transport bucket
    pub budget_transport: f64,
    /// Accommodation bucket
    pub budget_accommodation: f64,
    /// Activities bucket
    pub budget_activities: f64,
    /// Food & dining bucket
    pub budget_food: f64,
    /// Everything else
    pub budget_other: f64,
    /// When the trip was created
    pub created_at: DateTimeUtc,
    /// When the trip was last saved
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Trip and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One trip has many stops
    #[sea_orm(has_many = "super::stop::Entity")]
    Stops,
}

impl Related<super::stop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stops.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
