use anyhow::{Result, anyhow};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Years a month can be built for. Keeps every key within the 4-digit `YYYY-MM-DD` shape.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A displayable calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// `month` is 1-based. Returns `None` outside `1..=12` or outside the supported years.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month `date` falls on, or `None` outside the supported years.
    pub fn containing<D: Datelike>(date: &D) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(i64::from(self.days_in_month()) - 1)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 if is_leap_year(self.year()) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self.month() {
            1 => Self::new(self.year() - 1, 12),
            m => Self::new(self.year(), m - 1),
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self.month() {
            12 => Self::new(self.year() + 1, 1),
            m => Self::new(self.year(), m + 1),
        }
    }

    /// `YYYY-MM`, the same prefix every key of this month starts with.
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }

    /// Human label for headings, e.g. `March 2024` for `%B %Y`.
    ///
    /// Falls back to `YYYY-MM` when `format` has an unknown specifier.
    pub fn label(&self, format: &str) -> String {
        let mut label = String::new();
        match write!(label, "{}", self.first.format(format)) {
            Ok(()) => label,
            Err(_) => self.prefix(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

impl FromStr for YearMonth {
    type Err = anyhow::Error;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("expected YYYY-MM, got '{s}'"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| anyhow!("invalid year in '{s}'"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| anyhow!("invalid month in '{s}'"))?;
        Self::new(year, month).ok_or_else(|| anyhow!("'{s}' is not a valid month"))
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(0, 1).is_none());
        assert!(YearMonth::new(10_000, 1).is_none());
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        assert_eq!(ym(2023, 2).days_in_month(), 28);
        assert_eq!(ym(1900, 2).days_in_month(), 28);
        assert_eq!(ym(2000, 2).days_in_month(), 29);
        assert_eq!(ym(2024, 4).days_in_month(), 30);
        assert_eq!(ym(2024, 12).days_in_month(), 31);
        assert_eq!(ym(2024, 2).last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn navigation_crosses_years() {
        assert_eq!(ym(2024, 1).prev(), Some(ym(2023, 12)));
        assert_eq!(ym(2024, 12).next(), Some(ym(2025, 1)));
        assert_eq!(ym(MIN_YEAR, 1).prev(), None);
        assert_eq!(ym(MAX_YEAR, 12).next(), None);
    }

    #[test]
    fn parses_and_displays_prefix() {
        let m: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(m, ym(2024, 3));
        assert_eq!(m.to_string(), "2024-03");
        assert!("2024/03".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
    }

    #[test]
    fn containing_uses_calendar_fields() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(YearMonth::containing(&d), Some(ym(2024, 3)));
        let far = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert_eq!(YearMonth::containing(&far), None);
    }

    #[test]
    fn label_formats_or_falls_back_to_prefix() {
        assert_eq!(ym(2024, 3).label("%B %Y"), "March 2024");
        assert_eq!(ym(2024, 3).label("%Q %Y"), "2024-03");
    }
}
