//! Schedule entry entity - A timed item on one day of a stop.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Schedule entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule_entries")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// ID of the owning stop
    pub stop_id: Uuid,
    /// Day the entry is scheduled on
    pub date: Date,
    /// Time of day
    pub time: Time,
    /// What happens (e.g., "Train to Rome")
    pub name: String,
    /// `"transport"`, `"accommodation"`, `"activity"` or `"food"`
    pub kind: String,
    /// Cost in the trip currency
    pub cost: f64,
    /// Insertion order within the stop, used to break time ties
    pub position: i32,
}

/// Defines relationships between `ScheduleEntry` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry belongs to one stop
    #[sea_orm(
        belongs_to = "super::stop::Entity",
        from = "Column::StopId",
        to = "super::stop::Column::Id"
    )]
    Stop,
}

impl Related<super::stop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
