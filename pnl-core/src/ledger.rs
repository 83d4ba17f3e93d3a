//! The `Ledger` façade: everything a front-end needs to show and edit the calendar.

use crate::aggregate::{MonthTotal, sum_month};
use crate::calendar::{DayCell, build_grid};
use crate::config::Config;
use crate::currency::CurrencyFormatter;
use crate::draft::EntryDraft;
use crate::entry::Entry;
use crate::month::YearMonth;
use crate::store::{EntryStore, FileSlot, STORAGE_KEY, StorageSlot};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;

/// A rendered month: its week-aligned cells and the total of the month.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<DayCell>,
    pub total: MonthTotal,
}

impl MonthGrid {
    /// Rows of seven cells, Monday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

/// The central struct for all calendar operations.
#[derive(Debug)]
pub struct Ledger<S = FileSlot> {
    pub config: Config,
    store: EntryStore<S>,
    currency: CurrencyFormatter,
}

impl Ledger<FileSlot> {
    /// Creates a new `Ledger`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Ledger` with a specific `Config`, stored in `{data_dir}/trading.calendar.entries.v1.json`.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating {}", config.data_dir.display()))?;
        let slot = FileSlot::new(config.data_dir.join(format!("{STORAGE_KEY}.json")));
        Ok(Self::with_slot(config, slot))
    }
}

impl<S: StorageSlot> Ledger<S> {
    /// Creates a `Ledger` over any storage slot (e.g. a [`crate::store::MemorySlot`]).
    pub fn with_slot(config: Config, slot: S) -> Self {
        let currency = CurrencyFormatter::new(&config.currency_symbol);
        Self {
            config,
            store: EntryStore::new(slot),
            currency,
        }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Cells and total of `month`, both derived from a single read of the store.
    pub fn grid(&self, month: YearMonth) -> MonthGrid {
        let entries = self.store.load();
        MonthGrid {
            month,
            cells: build_grid(month, &entries),
            total: MonthTotal::of(sum_month(&entries, month)),
        }
    }

    pub fn monthly_total(&self, month: YearMonth) -> MonthTotal {
        MonthTotal::of(sum_month(&self.store.load(), month))
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<Entry> {
        self.store.get(&date)
    }

    /// The form values for `date`: the stored entry, or blank fields.
    pub fn draft_for(&self, date: NaiveDate) -> EntryDraft {
        EntryDraft::for_entry(date, self.entry_for(date).as_ref())
    }

    pub fn upsert_entry(
        &self,
        date: NaiveDate,
        profit_text: &str,
        notes_text: &str,
        photo: Option<String>,
    ) -> Result<Option<Entry>> {
        self.store.upsert(&date, profit_text, notes_text, photo)
    }

    pub fn save_draft(&self, draft: &EntryDraft) -> Result<Option<Entry>> {
        self.upsert_entry(draft.date, &draft.profit, &draft.notes, draft.photo.clone())
    }

    pub fn remove_photo(&self, date: NaiveDate) -> Result<Option<Entry>> {
        self.store.remove_photo(&date)
    }

    pub fn format_amount(&self, amount: Option<f64>) -> String {
        self.currency.format(amount)
    }

    pub fn month_label(&self, month: YearMonth) -> String {
        month.label(&self.config.month_label_format)
    }
}
