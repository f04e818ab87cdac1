//! Customer birthday with optional year
//!
//! Square sends birthdays as `YYYY-MM-DD` (sometimes with a trailing time
//! component). When the customer did not share a year the API uses the
//! placeholder year `0000`, which no calendar type accepts. `Birthday` keeps
//! the year optional and writes the placeholder back on serialization.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DomainError;

/// Leap year used to validate month/day pairs when no year is known.
const PLACEHOLDER_LEAP_YEAR: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday {
    year: Option<i32>,
    month: u32,
    day: u32,
}

impl Birthday {
    /// Birthday with a known year.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` when the date does not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        Self::build(Some(year), month, day)
    }

    /// Birthday without a year. February 29 is accepted.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidInput` when the month/day pair does not
    /// exist in any year.
    pub fn without_year(month: u32, day: u32) -> Result<Self, DomainError> {
        Self::build(None, month, day)
    }

    fn build(year: Option<i32>, month: u32, day: u32) -> Result<Self, DomainError> {
        if year == Some(0) {
            return Self::build(None, month, day);
        }
        NaiveDate::from_ymd_opt(year.unwrap_or(PLACEHOLDER_LEAP_YEAR), month, day).ok_or_else(
            || DomainError::InvalidInput(format!("invalid birthday: month {month}, day {day}")),
        )?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Calendar date, when the year is known.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.year.and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self { year: Some(date.year()), month: date.month(), day: date.day() }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year.unwrap_or(0), self.month, self.day)
    }
}

impl FromStr for Birthday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidData(format!("invalid birthday '{s}'"));

        // Drop any time component: "0000-09-21T00:00:00-00:00" → "0000-09-21".
        let date = s.trim().get(..10).ok_or_else(invalid)?;
        let mut parts = date.splitn(3, '-');
        let mut next_number = || -> Result<u32, DomainError> {
            parts.next().and_then(|part| part.parse::<u32>().ok()).ok_or_else(invalid)
        };

        let year = next_number()?;
        let month = next_number()?;
        let day = next_number()?;
        let year = i32::try_from(year).map_err(|_| invalid())?;

        Self::build(Some(year), month, day).map_err(|_| invalid())
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_date() {
        let birthday: Birthday = "1998-09-21".parse().unwrap();
        assert_eq!(birthday.year(), Some(1998));
        assert_eq!(birthday.month(), 9);
        assert_eq!(birthday.day(), 21);
        assert_eq!(birthday.to_naive_date(), NaiveDate::from_ymd_opt(1998, 9, 21));
    }

    #[test]
    fn placeholder_year_means_unknown() {
        let birthday: Birthday = "0000-02-29".parse().unwrap();
        assert_eq!(birthday.year(), None);
        assert_eq!(birthday.to_naive_date(), None);
        assert_eq!(birthday.to_string(), "0000-02-29");
    }

    #[test]
    fn accepts_trailing_time_component() {
        let birthday: Birthday = "0000-09-21T00:00:00-00:00".parse().unwrap();
        assert_eq!((birthday.year(), birthday.month(), birthday.day()), (None, 9, 21));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!("2021-02-29".parse::<Birthday>().is_err());
        assert!("0000-13-01".parse::<Birthday>().is_err());
        assert!("09-21".parse::<Birthday>().is_err());
        assert!(Birthday::without_year(4, 31).is_err());
    }

    #[test]
    fn serde_uses_wire_format() {
        let birthday = Birthday::without_year(12, 5).unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"0000-12-05\"");

        let parsed: Birthday = serde_json::from_str("\"1990-01-02\"").unwrap();
        assert_eq!(parsed, Birthday::new(1990, 1, 2).unwrap());
    }
}
