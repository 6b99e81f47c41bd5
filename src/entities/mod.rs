//! Entity module - Contains all SeaORM entity definitions for the database.
//! Trips own their stops; stops own their activity references and schedule
//! entries. Cities and activities form the catalog.

pub mod activity;
pub mod city;
pub mod schedule_entry;
pub mod stop;
pub mod stop_activity;
pub mod trip;

// Re-export specific types to avoid conflicts
pub use activity::{Column as ActivityColumn, Entity as Activity, Model as ActivityModel};
pub use city::{Column as CityColumn, Entity as City, Model as CityModel};
pub use schedule_entry::{
    Column as ScheduleEntryColumn, Entity as ScheduleEntry, Model as ScheduleEntryModel,
};
pub use stop::{Column as StopColumn, Entity as Stop, Model as StopModel};
pub use stop_activity::{
    Column as StopActivityColumn, Entity as StopActivity, Model as StopActivityModel,
};
pub use trip::{Column as TripColumn, Entity as Trip, Model as TripModel};
