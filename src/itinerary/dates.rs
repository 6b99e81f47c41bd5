//! Calendar date ranges used by trips and stops.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar dates with `start <= end`.
///
/// The ordering is checked once, when the range is built. Everything that
/// holds a `DateRange` can rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting an end date before the start date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses two `YYYY-MM-DD` strings into a range.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Self::new(start, end)
    }

    /// A range covering a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive day count: a same-day range is one day long.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when `other` lies entirely inside this range.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| Error::Validation {
        message: format!("Invalid date '{value}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_duration_days_is_inclusive() -> Result<()> {
        let range = DateRange::parse("2024-06-15", "2024-06-20")?;
        assert_eq!(range.duration_days(), 6);

        let three_weeks = DateRange::parse("2024-06-15", "2024-07-06")?;
        assert_eq!(three_weeks.duration_days(), 22);
        Ok(())
    }

    #[test]
    fn test_same_day_range_is_one_day() -> Result<()> {
        let range = DateRange::parse("2024-06-15", "2024-06-15")?;
        assert_eq!(range.duration_days(), 1);
        assert_eq!(range, DateRange::single_day(parse_date("2024-06-15")?));
        Ok(())
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let result = DateRange::parse("2024-06-20", "2024-06-15");
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let result = DateRange::parse("2024-13-01", "2024-12-01");
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_contains_and_overlaps() -> Result<()> {
        let trip = DateRange::parse("2024-06-15", "2024-07-06")?;
        let paris = DateRange::parse("2024-06-15", "2024-06-20")?;
        let rome = DateRange::parse("2024-06-20", "2024-06-27")?;
        let late = DateRange::parse("2024-07-01", "2024-07-10")?;

        assert!(trip.contains(&paris));
        assert!(!trip.contains(&late));
        assert!(paris.overlaps(&rome));
        assert!(!paris.overlaps(&late));
        assert!(trip.contains_date(parse_date("2024-07-06")?));
        assert!(!trip.contains_date(parse_date("2024-07-07")?));
        Ok(())
    }
}
