//! Unified error type for `TripBuddy`.
//!
//! Pure itinerary edits treat unknown identifiers as no-ops and never fail;
//! the variants here come from boundary constructors (date ranges, budgets),
//! opt-in date policies, ownership checks and the storage layer.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Integer conversion error: {0}")]
    IntConversion(#[from] std::num::TryFromIntError),

    #[error("Trip not found: {id}")]
    TripNotFound { id: Uuid },

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Stop {stop_id} dates fall outside the trip's date range")]
    StopOutsideTrip { stop_id: Uuid },

    #[error("Stop {stop_id} dates overlap stop {other_id}")]
    OverlappingStops { stop_id: Uuid, other_id: Uuid },

    #[error("User {user_id} does not own trip {trip_id}")]
    NotOwner { trip_id: Uuid, user_id: String },

    #[error("Saving trip {trip_id} failed after {attempts} attempt(s): {message}")]
    SaveFailed {
        trip_id: Uuid,
        attempts: u32,
        message: String,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
