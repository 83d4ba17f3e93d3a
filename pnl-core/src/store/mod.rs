//! The persistent mapping from [`DateKey`] to [`Entry`].
//!
//! Every operation is a full read-modify-write over the whole map: `load` reads
//! the slot fresh, mutations change the loaded copy, `save` overwrites the slot.
//! Two interleaved load-mutate-save sequences for different days will lose one
//! of the updates. Callers are expected to drive the store from a single thread
//! of user actions.

mod slot;

pub use slot::{FileSlot, MemorySlot, StorageSlot};

use crate::date_key::{DateKey, key_of};
use crate::entry::Entry;
use anyhow::{Context, Result};
use chrono::Datelike;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Fixed, versioned identifier of the storage slot.
pub const STORAGE_KEY: &str = "trading.calendar.entries.v1";

/// All entries, ordered by day.
pub type Entries = BTreeMap<DateKey, Entry>;

#[derive(Debug)]
pub struct EntryStore<S> {
    slot: S,
}

impl<S: StorageSlot> EntryStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Reads the whole map. Never fails: an unreadable or malformed slot is an empty store.
    pub fn load(&self) -> Entries {
        match self.slot.read() {
            Ok(Some(raw)) => decode_entries(&raw),
            Ok(None) => Entries::new(),
            Err(error) => {
                warn!(error = %format!("{error:#}"), "could not read entries, starting empty");
                Entries::new()
            }
        }
    }

    /// Replaces everything persisted with `entries`.
    pub fn save(&self, entries: &Entries) -> Result<()> {
        let json = serde_json::to_string(entries).context("serializing entries")?;
        self.slot.write(&json).context("saving entries")?;
        debug!(count = entries.len(), "saved entries");
        Ok(())
    }

    pub fn get<D: Datelike>(&self, date: &D) -> Option<Entry> {
        self.load().remove(&key_of(date))
    }

    /// Normalizes the raw form values for `date`, then stores them or, when nothing
    /// meaningful is left, deletes the day. Returns what is now stored for the day.
    pub fn upsert<D: Datelike>(
        &self,
        date: &D,
        raw_profit: &str,
        raw_notes: &str,
        raw_photo: Option<String>,
    ) -> Result<Option<Entry>> {
        let key = key_of(date);
        let mut entries = self.load();
        let entry = Entry::from_raw(raw_profit, raw_notes, raw_photo);
        let stored = put_or_prune(&mut entries, key, entry);
        self.save(&entries)?;
        Ok(stored)
    }

    /// Drops the photo of `date`'s entry, deleting the entry when nothing else remains.
    /// Does not write anything when the day has no entry.
    pub fn remove_photo<D: Datelike>(&self, date: &D) -> Result<Option<Entry>> {
        let key = key_of(date);
        let mut entries = self.load();
        let Some(mut entry) = entries.remove(&key) else {
            return Ok(None);
        };
        entry.photo = None;
        let stored = put_or_prune(&mut entries, key, entry);
        self.save(&entries)?;
        Ok(stored)
    }
}

fn put_or_prune(entries: &mut Entries, key: DateKey, entry: Entry) -> Option<Entry> {
    if entry.is_empty() {
        if entries.remove(&key).is_some() {
            debug!(%key, "pruned empty entry");
        }
        None
    } else {
        entries.insert(key, entry.clone());
        Some(entry)
    }
}

/// Decodes the slot content, keeping every record that can be understood.
fn decode_entries(raw: &str) -> Entries {
    let map: Map<String, Value> = match serde_json::from_str(raw) {
        Ok(map) => map,
        Err(error) => {
            warn!(%error, "stored entries are malformed, starting empty");
            return Entries::new();
        }
    };

    let mut entries = Entries::new();
    for (raw_key, value) in map {
        let Some(key) = DateKey::parse(&raw_key) else {
            warn!(key = %raw_key, "skipping entry with invalid date key");
            continue;
        };
        match serde_json::from_value::<Entry>(value) {
            Ok(entry) if entry.is_empty() => {
                debug!(%key, "dropping stored empty entry");
            }
            Ok(entry) => {
                entries.insert(key, entry);
            }
            Err(error) => {
                warn!(%key, %error, "skipping malformed entry");
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn mk_store() -> EntryStore<MemorySlot> {
        EntryStore::new(MemorySlot::new())
    }

    #[test]
    fn load_missing_slot_is_empty() {
        assert!(mk_store().load().is_empty());
    }

    #[test]
    fn load_malformed_json_is_empty() {
        let store = EntryStore::new(MemorySlot::with_contents("{not json"));
        assert!(store.load().is_empty());

        let store = EntryStore::new(MemorySlot::with_contents("[1, 2, 3]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_skips_bad_records_and_keeps_the_rest() {
        let raw = r#"{
            "2024-03-01": {"profit": 50, "notes": ""},
            "yesterday": {"profit": 10, "notes": ""},
            "2024-03-02": "not an entry",
            "2024-03-03": {"profit": "", "notes": "  "}
        }"#;
        let store = EntryStore::new(MemorySlot::with_contents(raw));
        let entries = store.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&key_of(&day(2024, 3, 1))].profit, Some(50.0));
    }

    #[test]
    fn empty_upsert_on_fresh_date_creates_nothing() {
        let store = mk_store();
        let stored = store.upsert(&day(2024, 3, 1), "", "", None).unwrap();
        assert_eq!(stored, None);
        assert!(store.load().is_empty());
        assert!(store.get(&day(2024, 3, 1)).is_none());
    }

    #[test]
    fn clearing_all_fields_prunes_the_entry() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store.upsert(&d, "100", "note", None).unwrap();
        assert!(store.get(&d).is_some());

        store.upsert(&d, "", "", None).unwrap();
        assert!(store.get(&d).is_none());
        assert_eq!(store.slot().contents().as_deref(), Some("{}"));
    }

    #[test]
    fn upsert_round_trips_all_fields() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store
            .upsert(&d, "-42.5", "loss day", Some(PHOTO.to_string()))
            .unwrap();

        let entry = store.get(&d).unwrap();
        assert_eq!(entry.profit, Some(-42.5));
        assert_eq!(entry.notes, "loss day");
        assert_eq!(entry.photo.as_deref(), Some(PHOTO));
    }

    #[test]
    fn zero_profit_alone_keeps_the_entry() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store.upsert(&d, "0", "", None).unwrap();
        assert_eq!(store.get(&d).unwrap().profit, Some(0.0));
    }

    #[test]
    fn whitespace_profit_alone_is_pruned() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        assert_eq!(store.upsert(&d, "  ", "", None).unwrap(), None);
        assert!(store.get(&d).is_none());

        store.upsert(&d, "  ", "held overnight", None).unwrap();
        assert_eq!(store.get(&d).unwrap().profit, None);
    }

    #[test]
    fn non_numeric_profit_alone_is_pruned() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store.upsert(&d, "100", "", None).unwrap();
        store.upsert(&d, "lots", "", None).unwrap();
        assert!(store.get(&d).is_none());
    }

    #[test]
    fn non_numeric_profit_with_notes_is_stored_absent() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store.upsert(&d, "lots", "great day", None).unwrap();
        let entry = store.get(&d).unwrap();
        assert_eq!(entry.profit, None);
        assert_eq!(entry.notes, "great day");
    }

    #[test]
    fn upsert_leaves_other_days_alone() {
        let store = mk_store();
        store.upsert(&day(2024, 3, 1), "10", "", None).unwrap();
        store.upsert(&day(2024, 3, 2), "20", "", None).unwrap();
        store.upsert(&day(2024, 3, 1), "", "", None).unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key(&key_of(&day(2024, 3, 2))));
    }

    #[test]
    fn remove_photo_keeps_entry_with_notes() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store
            .upsert(&d, "", "chart attached", Some(PHOTO.to_string()))
            .unwrap();

        let remaining = store.remove_photo(&d).unwrap().unwrap();
        assert_eq!(remaining.notes, "chart attached");
        assert_eq!(remaining.photo, None);
        assert_eq!(store.get(&d).unwrap().photo, None);
    }

    #[test]
    fn remove_photo_deletes_photo_only_entry() {
        let store = mk_store();
        let d = day(2024, 3, 15);
        store.upsert(&d, "", "", Some(PHOTO.to_string())).unwrap();

        assert_eq!(store.remove_photo(&d).unwrap(), None);
        assert!(store.get(&d).is_none());
    }

    #[test]
    fn remove_photo_without_entry_does_not_write() {
        let store = EntryStore::new(MemorySlot::read_only(None));
        assert_eq!(store.remove_photo(&day(2024, 3, 15)).unwrap(), None);
    }

    #[test]
    fn write_failures_propagate() {
        let store = EntryStore::new(MemorySlot::read_only(None));
        assert!(store.upsert(&day(2024, 3, 15), "1", "", None).is_err());
    }

    #[test]
    fn file_backed_store_survives_reopening() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(format!("{STORAGE_KEY}.json"));
        let d = day(2024, 2, 29);

        EntryStore::new(FileSlot::new(path.clone()))
            .upsert(&d, "12.25", "leap day", None)
            .unwrap();

        let reopened = EntryStore::new(FileSlot::new(path));
        let entry = reopened.get(&d).unwrap();
        assert_eq!(entry.profit, Some(12.25));
        assert_eq!(entry.notes, "leap day");
    }

    #[test]
    fn persisted_shape_matches_the_storage_format() {
        let store = mk_store();
        store.upsert(&day(2024, 3, 1), "50", "", None).unwrap();
        store.upsert(&day(2024, 3, 2), "", "flat", None).unwrap();

        let raw: Value = serde_json::from_str(&store.slot().contents().unwrap()).unwrap();
        assert_eq!(raw["2024-03-01"]["profit"], 50.0);
        assert_eq!(raw["2024-03-01"]["notes"], "");
        assert!(raw["2024-03-01"].get("photo").is_none());
        assert_eq!(raw["2024-03-02"]["profit"], "");
    }
}
