//! Read-only projections over a trip: duration, budget figures, status and
//! the summary card shown in trip lists.

use super::{DateRange, Trip, Visibility};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive number of days between the trip's start and end dates.
#[must_use]
pub fn duration_days(trip: &Trip) -> i64 {
    trip.dates.duration_days()
}

/// `total - spent`; negative when the trip is over budget.
#[must_use]
pub fn budget_remaining(trip: &Trip) -> f64 {
    trip.budget.remaining()
}

/// Share of the budget already spent, `None` for a zero budget.
#[must_use]
pub fn budget_spent_percent(trip: &Trip) -> Option<f64> {
    trip.budget.spent_percent()
}

/// Where a trip sits relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    #[must_use]
    pub fn of(dates: &DateRange, today: NaiveDate) -> Self {
        if today < dates.start() {
            Self::Upcoming
        } else if today > dates.end() {
            Self::Completed
        } else {
            Self::Ongoing
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Ongoing => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Compact view of a trip for list pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub dates: DateRange,
    pub duration_days: i64,
    pub destinations: Vec<String>,
    pub estimated_budget: f64,
    pub status: TripStatus,
    pub visibility: Visibility,
    pub cover_image_url: Option<String>,
}

impl TripSummary {
    #[must_use]
    pub fn of(trip: &Trip, today: NaiveDate) -> Self {
        Self {
            id: trip.id,
            name: trip.name.clone(),
            description: trip.description.clone(),
            dates: trip.dates,
            duration_days: duration_days(trip),
            destinations: trip.destinations(),
            estimated_budget: trip.budget.total,
            status: TripStatus::of(&trip.dates, today),
            visibility: trip.visibility,
            cover_image_url: trip.cover_image_url.clone(),
        }
    }
}

/// Filter for the "my trips" list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripFilter {
    /// Matched case-insensitively against the trip name and stop cities
    pub query: Option<String>,
    pub status: Option<TripStatus>,
}

impl TripFilter {
    #[must_use]
    pub fn matches(&self, summary: &TripSummary) -> bool {
        let status_ok = self.status.is_none_or(|status| status == summary.status);
        let query_ok = self.query.as_deref().is_none_or(|query| {
            let query = query.trim().to_lowercase();
            summary.name.to_lowercase().contains(&query)
                || summary
                    .destinations
                    .iter()
                    .any(|city| city.to_lowercase().contains(&query))
        });
        status_ok && query_ok
    }
}
