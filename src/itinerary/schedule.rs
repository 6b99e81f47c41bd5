//! Per-day schedules attached to a stop.
//!
//! A stop's activity list is an unordered-in-time set of catalog references.
//! The schedule is the richer view shown on trip pages: concrete entries with
//! a date, a time of day and a cost. [`Day`] groups them for display.

use crate::errors::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a schedule entry is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Transport,
    Accommodation,
    Activity,
    Food,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Accommodation => "accommodation",
            Self::Activity => "activity",
            Self::Food => "food",
        }
    }

    /// Case-insensitive parse of a stored or user-supplied label.
    pub fn parse(label: &str) -> Result<Self> {
        [
            Self::Transport,
            Self::Accommodation,
            Self::Activity,
            Self::Food,
        ]
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| Error::Validation {
            message: format!("Unknown schedule entry kind '{label}'"),
        })
    }
}

/// One scheduled item on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub name: String,
    pub kind: EntryKind,
    pub cost: f64,
}

impl ScheduleEntry {
    /// Builds an entry with a fresh id. The cost must be finite and non-negative.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        name: impl Into<String>,
        kind: EntryKind,
        cost: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Schedule entry name cannot be empty".to_string(),
            });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::InvalidAmount { amount: cost });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            time,
            name: name.trim().to_string(),
            kind,
            cost,
        })
    }
}

/// A calendar day and the entries scheduled on it, ordered by time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub entries: Vec<ScheduleEntry>,
}

impl Day {
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.entries.iter().map(|entry| entry.cost).sum()
    }
}

/// Groups entries into days, ascending by date.
///
/// Within a day entries are ordered by time; entries at the same time keep
/// their insertion order.
#[must_use]
pub fn group_by_day(entries: &[ScheduleEntry]) -> Vec<Day> {
    let mut sorted: Vec<&ScheduleEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| (entry.date, entry.time));

    let mut days: Vec<Day> = Vec::new();
    for entry in sorted {
        match days.last_mut() {
            Some(day) if day.date == entry.date => day.entries.push(entry.clone()),
            _ => days.push(Day {
                date: entry.date,
                entries: vec![entry.clone()],
            }),
        }
    }
    days
}

/// Parses a time of day written as `10:00 AM` or `14:30`.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|e| Error::Validation {
            message: format!("Invalid time '{value}': {e}"),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::itinerary::dates::parse_date;

    fn entry(date: &str, time: &str, name: &str, kind: EntryKind, cost: f64) -> ScheduleEntry {
        ScheduleEntry::new(
            parse_date(date).unwrap(),
            parse_time(time).unwrap(),
            name,
            kind,
            cost,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_time_formats() -> Result<()> {
        assert_eq!(parse_time("10:00 AM")?, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(parse_time("7:00 PM")?, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
        assert_eq!(parse_time("14:30")?, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert!(parse_time("noon").is_err());
        Ok(())
    }

    #[test]
    fn test_group_by_day_orders_dates_and_times() {
        let entries = vec![
            entry("2024-06-16", "1:00 PM", "Lunch at Café de Flore", EntryKind::Food, 35.0),
            entry("2024-06-15", "7:00 PM", "Evening Seine River Cruise", EntryKind::Activity, 15.0),
            entry("2024-06-15", "10:00 AM", "Arrive at CDG Airport", EntryKind::Transport, 0.0),
            entry("2024-06-16", "9:00 AM", "Eiffel Tower Visit", EntryKind::Activity, 28.0),
        ];

        let days = group_by_day(&entries);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, parse_date("2024-06-15").unwrap());
        assert_eq!(days[0].entries[0].name, "Arrive at CDG Airport");
        assert_eq!(days[0].entries[1].name, "Evening Seine River Cruise");
        assert_eq!(days[1].entries[0].name, "Eiffel Tower Visit");
        assert_eq!(days[1].total_cost(), 63.0);
    }

    #[test]
    fn test_same_time_keeps_insertion_order() {
        let entries = vec![
            entry("2024-06-21", "2:00 PM", "First", EntryKind::Activity, 0.0),
            entry("2024-06-21", "2:00 PM", "Second", EntryKind::Activity, 0.0),
        ];
        let days = group_by_day(&entries);
        assert_eq!(days[0].entries[0].name, "First");
        assert_eq!(days[0].entries[1].name, "Second");
    }

    #[test]
    fn test_entry_rejects_negative_cost_and_empty_name() {
        let date = parse_date("2024-06-21").unwrap();
        let time = parse_time("8:00 AM").unwrap();
        assert!(matches!(
            ScheduleEntry::new(date, time, "Train to Rome", EntryKind::Transport, -95.0),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            ScheduleEntry::new(date, time, "  ", EntryKind::Transport, 95.0),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_entry_kind_parse() -> Result<()> {
        assert_eq!(EntryKind::parse("Accommodation")?, EntryKind::Accommodation);
        assert!(EntryKind::parse("spa").is_err());
        Ok(())
    }
}
