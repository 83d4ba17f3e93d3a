//! Month grid derivation.
//!
//! Weeks run Monday to Sunday. A grid is the target month padded with the tail of
//! the previous month and the head of the next one, so that it always splits into
//! whole weeks.

use crate::date_key::{DateKey, key_of};
use crate::entry::Entry;
use crate::month::YearMonth;
use crate::store::Entries;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Header labels, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum WeekdayLabel {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekdayLabel {
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Sat | Self::Sun)
    }
}

/// The header row: `Mon, Tue, Wed, Thu, Fri, Sat, Sun`.
pub fn weekday_headers() -> impl Iterator<Item = WeekdayLabel> {
    WeekdayLabel::iter()
}

/// One position of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: DateKey,
    /// Belongs to the previous or next month, shown only to complete a week.
    pub outside: bool,
    pub weekend: bool,
    pub entry: Option<Entry>,
}

impl DayCell {
    fn new(date: NaiveDate, outside: bool, entries: &Entries) -> Self {
        let key = key_of(&date);
        let entry = entries.get(&key).cloned();
        Self {
            date,
            key,
            outside,
            weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            entry,
        }
    }

    pub fn profit(&self) -> Option<f64> {
        self.entry.as_ref().and_then(|e| e.profit)
    }

    /// A profit was entered and it is not zero.
    pub fn has_profit(&self) -> bool {
        self.profit().is_some_and(|p| p != 0.0)
    }

    pub fn has_note(&self) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| !e.notes.trim().is_empty())
    }

    pub fn has_photo(&self) -> bool {
        self.entry.as_ref().is_some_and(|e| e.photo.is_some())
    }

    pub fn negative(&self) -> bool {
        self.profit().is_some_and(|p| p < 0.0)
    }
}

/// Builds the week-aligned cells of `month`, decorated from `entries`.
///
/// The result length is a positive multiple of 7, and every day of `month`
/// appears exactly once with `outside == false`.
pub fn build_grid(month: YearMonth, entries: &Entries) -> Vec<DayCell> {
    let first = month.first_day();
    let days_in_month = month.days_in_month();

    // 0 = Sunday .. 6 = Saturday, shifted so Monday leads.
    let first_weekday = first.weekday().num_days_from_sunday();
    let leading = (first_weekday + 6) % 7;

    let mut cells = Vec::with_capacity(42);
    for back in (1..=leading).rev() {
        let date = first - Duration::days(i64::from(back));
        cells.push(DayCell::new(date, true, entries));
    }

    for offset in 0..days_in_month {
        let date = first + Duration::days(i64::from(offset));
        cells.push(DayCell::new(date, false, entries));
    }

    let next_first = first + Duration::days(i64::from(days_in_month));
    let trailing = (7 - cells.len() % 7) % 7;
    for offset in 0..trailing {
        let date = next_first + Duration::days(offset as i64);
        cells.push(DayCell::new(date, true, entries));
    }

    cells
}
