//! ISO-8601 date-or-datetime values.
//!
//! Remote-data windows in the configuration (for example the wave reanalysis
//! period) accept either a plain date or a full datetime. Both forms are
//! normalised to a naive UTC datetime; a plain date means midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A point in time parsed from an ISO-8601 date or datetime string.
///
/// Accepted spellings:
/// - `1993-01-01`
/// - `1993-01-01T06:00:00` (optionally with fractional seconds)
/// - `1993-01-01 06:00:00`
/// - `1993-01-01T06:00:00Z` / `1993-01-01T06:00:00+02:00` (converted to UTC)
///
/// Serializes back as `YYYY-MM-DDTHH:MM:SS[.fff]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime(NaiveDateTime);

impl IsoDateTime {
    /// Midnight at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl FromStr for IsoDateTime {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.naive_utc()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT) {
            return Ok(Self(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
            return Ok(Self(dt));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self::from_date)
    }
}

impl fmt::Display for IsoDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

impl Serialize for IsoDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e| {
            serde::de::Error::custom(format!(
                "invalid ISO-8601 date or datetime `{s}`: {e}"
            ))
        })
    }
}
