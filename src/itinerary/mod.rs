//! Itinerary model: trips, their ordered stops, and the activity references
//! and schedules those stops hold.
//!
//! Everything here is synchronous and free of I/O. Storage lives in
//! [`crate::core`].

pub mod activity;
pub mod budget;
pub mod city;
pub mod dates;
pub mod schedule;
pub mod stop;
pub mod trip;
pub mod views;

pub use activity::{Activity, ActivityCategory};
pub use budget::{Budget, BudgetCategory};
pub use city::City;
pub use dates::DateRange;
pub use schedule::{Day, EntryKind, ScheduleEntry};
pub use stop::Stop;
pub use trip::{DatePolicy, NewTrip, Trip, TripUpdate, Visibility};
pub use views::{TripFilter, TripStatus, TripSummary};
