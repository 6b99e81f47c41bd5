//! A single-city leg of a trip.

use super::{City, DateRange, Day, ScheduleEntry, schedule};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One city on a trip, with its own dates, activity references and schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: Uuid,
    /// Zero-based order within the trip; contiguous across the trip's stops
    pub position: u32,
    pub city_id: String,
    pub city_name: String,
    pub country: String,
    /// Unset until the traveller picks dates
    pub dates: Option<DateRange>,
    /// Catalog activity ids, insertion ordered, no duplicates
    pub activity_ids: Vec<String>,
    /// Presentation-only: whether the stop card is expanded
    pub expanded: bool,
    pub schedule: Vec<ScheduleEntry>,
}

impl Stop {
    /// A fresh, expanded stop with no dates and no activities.
    #[must_use]
    pub fn new(city: &City, position: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            city_id: city.id.clone(),
            city_name: city.name.clone(),
            country: city.country.clone(),
            dates: None,
            activity_ids: Vec::new(),
            expanded: true,
            schedule: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_activity(&self, activity_id: &str) -> bool {
        self.activity_ids.iter().any(|id| id == activity_id)
    }

    /// Appends an activity reference unless it is already present.
    /// Returns whether the list changed.
    pub fn add_activity(&mut self, activity_id: &str) -> bool {
        if self.has_activity(activity_id) {
            return false;
        }
        self.activity_ids.push(activity_id.to_string());
        true
    }

    /// Drops an activity reference. Returns whether the list changed.
    pub fn remove_activity(&mut self, activity_id: &str) -> bool {
        let before = self.activity_ids.len();
        self.activity_ids.retain(|id| id != activity_id);
        before != self.activity_ids.len()
    }

    pub fn add_schedule_entry(&mut self, entry: ScheduleEntry) {
        self.schedule.push(entry);
    }

    /// Returns whether an entry was removed.
    pub fn remove_schedule_entry(&mut self, entry_id: Uuid) -> bool {
        let before = self.schedule.len();
        self.schedule.retain(|entry| entry.id != entry_id);
        before != self.schedule.len()
    }

    /// The schedule grouped into days.
    #[must_use]
    pub fn days(&self) -> Vec<Day> {
        schedule::group_by_day(&self.schedule)
    }

    #[must_use]
    pub fn scheduled_cost(&self) -> f64 {
        self.schedule.iter().map(|entry| entry.cost).sum()
    }

    /// Copy with fresh stop and schedule entry ids.
    #[must_use]
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            schedule: self
                .schedule
                .iter()
                .map(|entry| ScheduleEntry {
                    id: Uuid::new_v4(),
                    ..entry.clone()
                })
                .collect(),
            ..self.clone()
        }
    }
}
