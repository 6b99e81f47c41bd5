//! Stop activity entity - A stop's reference to a catalog activity.
//!
//! References are not foreign keys into `activities`: the catalog is an
//! external collaborator and removing a reference never touches it.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stop-to-activity reference model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stop_activities")]
pub struct Model {
    /// Row identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the owning stop
    pub stop_id: Uuid,
    /// Catalog activity id
    pub activity_id: String,
    /// Insertion order within the stop
    pub position: i32,
}

/// Defines relationships between `StopActivity` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each reference belongs to one stop
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
