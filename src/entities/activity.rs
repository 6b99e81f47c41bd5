//! Activity entity - Catalog of plannable activities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Activity catalog model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    /// Catalog identifier (e.g., `"a1"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Activity name
    pub name: String,
    /// Lowercase category label (e.g., `"sightseeing"`)
    pub category: String,
    /// Free-form duration (e.g., "3 hours")
    pub duration: Option<String>,
    /// Price in the catalog currency
    pub price: Option<f64>,
    /// Location label, usually a city name
    pub location: Option<String>,
}

/// Activities are referenced by id from `stop_activities`, without a foreign key
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
