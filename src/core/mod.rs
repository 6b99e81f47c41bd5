//! Core business logic - framework-agnostic, database-backed trip operations.

/// Catalog search, lookups and seeding
pub mod catalog;
/// Text rendering of trips and budgets
pub mod report;
/// Public itineraries, likes and trip copies
pub mod sharing;
/// Trip create/read/update/delete and listing
pub mod trip;
