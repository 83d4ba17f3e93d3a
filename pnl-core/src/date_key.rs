//! Canonical day identity used as the key of the entry store.
//!
//! A key is always built from the calendar fields of the value it is given
//! (`year()`, `month()`, `day()`), never from a UTC conversion, so an entry saved
//! late in the evening stays on the day the user clicked.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static KEY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key pattern"));

/// `YYYY-MM-DD` identity of a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Accepts a stored key back, rejecting anything that is not a real `YYYY-MM-DD` day.
    pub fn parse(input: &str) -> Option<Self> {
        if !KEY_SHAPE.is_match(input) {
            return None;
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .map(|_| Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `YYYY-MM` part of the key.
    pub fn month_prefix(&self) -> &str {
        self.0
            .rsplit_once('-')
            .map(|(prefix, _)| prefix)
            .unwrap_or(&self.0)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the key of the day `date` falls on, in `date`'s own timezone.
pub fn key_of<D: Datelike>(date: &D) -> DateKey {
    DateKey(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// `YYYY-MM` of the day `date` falls on.
pub fn month_prefix_of<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local, NaiveTime, TimeZone};

    #[test]
    fn pads_month_and_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(key_of(&d).as_str(), "2024-03-05");
        assert_eq!(month_prefix_of(&d), "2024-03");
    }

    #[test]
    fn same_local_day_same_key_across_offsets() {
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        // 23:30 in New York is already the next day in UTC.
        let late = west.with_ymd_and_hms(2024, 2, 29, 23, 30, 0).unwrap();
        // 00:30 in Tokyo is still the previous day in UTC.
        let early = east.with_ymd_and_hms(2024, 2, 29, 0, 30, 0).unwrap();
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assert_eq!(key_of(&late), key_of(&naive));
        assert_eq!(key_of(&early), key_of(&naive));
        assert_eq!(key_of(&late).as_str(), "2024-02-29");
    }

    #[test]
    fn first_of_month_does_not_shift() {
        let d = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let midnight = d.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        let local = Local.from_local_datetime(&midnight).earliest();

        assert_eq!(key_of(&midnight).as_str(), "2024-04-01");
        if let Some(local) = local {
            assert_eq!(key_of(&local).as_str(), "2024-04-01");
        }
    }

    #[test]
    fn parse_accepts_real_days_only() {
        assert!(DateKey::parse("2024-02-29").is_some());
        assert!(DateKey::parse("2023-02-29").is_none());
        assert!(DateKey::parse("2024-2-9").is_none());
        assert!(DateKey::parse("not-a-date").is_none());
        assert!(DateKey::parse("2024-03-15T10:00").is_none());
    }

    #[test]
    fn keys_order_chronologically() {
        let a = DateKey::parse("2024-01-31").unwrap();
        let b = DateKey::parse("2024-02-01").unwrap();
        assert!(a < b);
        assert_eq!(b.month_prefix(), "2024-02");
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(2024, 2, 1));
    }
}
