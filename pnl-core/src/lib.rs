pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod currency;
pub mod date_key;
pub mod draft;
pub mod entry;
pub mod ledger;
pub mod month;
pub mod photo;
pub mod selection;
pub mod store;

pub use aggregate::MonthTotal;
pub use calendar::{DayCell, WeekdayLabel, weekday_headers};
pub use config::Config;
pub use date_key::{DateKey, key_of, month_prefix_of};
pub use draft::{EntryDraft, PhotoApply};
pub use entry::Entry;
pub use ledger::{Ledger, MonthGrid};
pub use month::YearMonth;
pub use photo::PhotoError;
pub use selection::{Selection, SelectionTicket};
