//! The trip aggregate and its stop/activity editing operations.
//!
//! Every edit is total: an unknown stop id, a duplicate city or an activity
//! that is already (or no longer) referenced leaves the trip untouched. The
//! `bool`/`Option` results only report whether anything changed. The single
//! exception is [`Trip::set_stop_dates`] under a non-permissive
//! [`DatePolicy`], which reports the violated rule.

use super::{Budget, City, DateRange, ScheduleEntry, Stop};
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Whether a trip can be viewed by anyone holding its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// How strictly stop dates are checked when they are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Accept any well-ordered range
    #[default]
    Permissive,
    /// Stop dates must fall inside the trip's dates
    WithinTrip,
    /// Inside the trip's dates and not overlapping any other stop
    Strict,
}

/// Input for creating a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrip {
    pub name: String,
    pub description: String,
    pub dates: DateRange,
    pub cover_image_url: Option<String>,
}

/// Partial update of a trip's own fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dates: Option<DateRange>,
    /// `Some(None)` clears the cover image
    pub cover_image_url: Option<Option<String>>,
    pub budget: Option<Budget>,
}

/// A user's travel plan: dates, ordered stops, budget and visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub dates: DateRange,
    pub cover_image_url: Option<String>,
    pub visibility: Visibility,
    pub budget: Budget,
    pub likes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub(crate) stops: Vec<Stop>,
}

impl Trip {
    /// Creates an empty private trip owned by `owner_id`.
    pub fn new(owner_id: &str, new_trip: NewTrip) -> Result<Self> {
        let name = validate_name(&new_trip.name)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            name,
            description: new_trip.description.trim().to_string(),
            dates: new_trip.dates,
            cover_image_url: new_trip.cover_image_url,
            visibility: Visibility::Private,
            budget: Budget::default(),
            likes: 0,
            created_at: now,
            updated_at: now,
            stops: Vec::new(),
        })
    }

    /// Stops in itinerary order.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    #[must_use]
    pub fn stop(&self, stop_id: Uuid) -> Option<&Stop> {
        self.stops.iter().find(|stop| stop.id == stop_id)
    }

    #[must_use]
    pub fn stop_for_city(&self, city_id: &str) -> Option<&Stop> {
        self.stops.iter().find(|stop| stop.city_id == city_id)
    }

    fn stop_mut(&mut self, stop_id: Uuid) -> Option<&mut Stop> {
        self.stops.iter_mut().find(|stop| stop.id == stop_id)
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self.visibility, Visibility::Public)
    }

    /// City names in stop order.
    #[must_use]
    pub fn destinations(&self) -> Vec<String> {
        self.stops.iter().map(|stop| stop.city_name.clone()).collect()
    }

    /// Appends a stop for `city`.
    ///
    /// Returns the new stop's id, or `None` when the city already has a stop
    /// on this trip.
    pub fn add_stop(&mut self, city: &City) -> Option<Uuid> {
        if self.stop_for_city(&city.id).is_some() {
            debug!(trip_id = %self.id, city = %city.id, "City already on trip, ignoring");
            return None;
        }
        let position = u32::try_from(self.stops.len()).unwrap_or(u32::MAX);
        let stop = Stop::new(city, position);
        let stop_id = stop.id;
        self.stops.push(stop);
        self.touch();
        Some(stop_id)
    }

    /// Removes a stop and everything it owns. Returns whether a stop was removed.
    pub fn remove_stop(&mut self, stop_id: Uuid) -> bool {
        let before = self.stops.len();
        self.stops.retain(|stop| stop.id != stop_id);
        if before == self.stops.len() {
            return false;
        }
        self.renumber();
        self.touch();
        true
    }

    /// Moves a stop to `new_index`, clamped to the last position.
    /// Returns whether the order changed.
    pub fn move_stop(&mut self, stop_id: Uuid, new_index: usize) -> bool {
        let Some(from) = self.stops.iter().position(|stop| stop.id == stop_id) else {
            return false;
        };
        let to = new_index.min(self.stops.len() - 1);
        if from == to {
            return false;
        }
        let stop = self.stops.remove(from);
        self.stops.insert(to, stop);
        self.renumber();
        self.touch();
        true
    }

    /// Sets a stop's dates, checked against `policy`.
    ///
    /// Returns `Ok(false)` for an unknown stop.
    pub fn set_stop_dates(
        &mut self,
        stop_id: Uuid,
        dates: DateRange,
        policy: DatePolicy,
    ) -> Result<bool> {
        if self.stop(stop_id).is_none() {
            return Ok(false);
        }
        self.check_stop_dates(stop_id, &dates, policy)?;
        if let Some(stop) = self.stop_mut(stop_id) {
            stop.dates = Some(dates);
        }
        self.touch();
        Ok(true)
    }

    /// Clears a stop's dates. Returns whether the stop existed.
    pub fn clear_stop_dates(&mut self, stop_id: Uuid) -> bool {
        let Some(stop) = self.stop_mut(stop_id) else {
            return false;
        };
        stop.dates = None;
        self.touch();
        true
    }

    fn check_stop_dates(&self, stop_id: Uuid, dates: &DateRange, policy: DatePolicy) -> Result<()> {
        if policy == DatePolicy::Permissive {
            return Ok(());
        }
        if !self.dates.contains(dates) {
            return Err(Error::StopOutsideTrip { stop_id });
        }
        if policy == DatePolicy::Strict {
            let clash = self
                .stops
                .iter()
                .filter(|other| other.id != stop_id)
                .find(|other| other.dates.is_some_and(|range| range.overlaps(dates)));
            if let Some(other) = clash {
                return Err(Error::OverlappingStops {
                    stop_id,
                    other_id: other.id,
                });
            }
        }
        Ok(())
    }

    /// Adds an activity reference to a stop. Returns whether the stop changed.
    pub fn add_activity(&mut self, stop_id: Uuid, activity_id: &str) -> bool {
        let changed = self
            .stop_mut(stop_id)
            .is_some_and(|stop| stop.add_activity(activity_id));
        if changed {
            self.touch();
        }
        changed
    }

    /// Removes an activity reference from a stop. Returns whether the stop changed.
    pub fn remove_activity(&mut self, stop_id: Uuid, activity_id: &str) -> bool {
        let changed = self
            .stop_mut(stop_id)
            .is_some_and(|stop| stop.remove_activity(activity_id));
        if changed {
            self.touch();
        }
        changed
    }

    /// Flips the stop card's expanded flag. Not a domain change, so the
    /// update timestamp is left alone.
    pub fn toggle_expanded(&mut self, stop_id: Uuid) -> bool {
        self.stop_mut(stop_id).is_some_and(|stop| {
            stop.expanded = !stop.expanded;
            true
        })
    }

    /// Adds a schedule entry to a stop. Returns whether the stop existed.
    pub fn add_schedule_entry(&mut self, stop_id: Uuid, entry: ScheduleEntry) -> bool {
        let Some(stop) = self.stop_mut(stop_id) else {
            return false;
        };
        stop.add_schedule_entry(entry);
        self.touch();
        true
    }

    /// Returns whether an entry was removed.
    pub fn remove_schedule_entry(&mut self, stop_id: Uuid, entry_id: Uuid) -> bool {
        let changed = self
            .stop_mut(stop_id)
            .is_some_and(|stop| stop.remove_schedule_entry(entry_id));
        if changed {
            self.touch();
        }
        changed
    }

    /// Applies a partial update to the trip's own fields.
    pub fn apply_update(&mut self, update: TripUpdate) -> Result<()> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        if let Some(budget) = &update.budget {
            budget.validate()?;
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(budget) = update.budget {
            self.budget = budget;
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(dates) = update.dates {
            self.dates = dates;
        }
        if let Some(cover_image_url) = update.cover_image_url {
            self.cover_image_url = cover_image_url;
        }
        self.touch();
        Ok(())
    }

    /// Deep copy for another user: fresh ids throughout, private, no likes.
    #[must_use]
    pub fn copy_for(&self, owner_id: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_string(),
            visibility: Visibility::Private,
            likes: 0,
            created_at: now,
            updated_at: now,
            stops: self.stops.iter().map(Stop::duplicate).collect(),
            ..self.clone()
        }
    }

    /// Rewrites stop positions as 0..n in the current order.
    pub(crate) fn renumber(&mut self) {
        for (index, stop) in self.stops.iter_mut().enumerate() {
            stop.position = u32::try_from(index).unwrap_or(u32::MAX);
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: "Trip name cannot be empty".to_string(),
        });
    }
    Ok(name.to_string())
}
