//! City entity - Catalog of destinations that stops can be anchored to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// City catalog model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    /// Catalog identifier (e.g., `"paris"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// City name
    pub name: String,
    /// Country name
    pub country: String,
    /// Average rating, 0-5
    pub rating: Option<f64>,
    /// Relative cost, 1-4
    pub price_level: Option<i32>,
}

/// Cities have no stored relationships; stops copy the fields they need
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
