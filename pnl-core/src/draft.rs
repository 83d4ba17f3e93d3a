use crate::entry::{Entry, parse_profit};
use crate::photo::PhotoError;
use crate::selection::{Selection, SelectionTicket};
use chrono::NaiveDate;

/// The editable field values for one day, before they are saved.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    /// Raw profit text as typed; normalized only when saved.
    pub profit: String,
    pub notes: String,
    pub photo: Option<String>,
}

/// Outcome of handing a finished photo encode to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoApply {
    Applied,
    /// The user moved on before the encode finished; the draft was left untouched.
    Stale,
}

impl EntryDraft {
    /// Fills the form from the stored entry, or blank fields when the day has none.
    pub fn for_entry(date: NaiveDate, entry: Option<&Entry>) -> Self {
        match entry {
            Some(entry) => Self {
                date,
                profit: entry.profit_text(),
                notes: entry.notes.clone(),
                photo: entry.photo.clone(),
            },
            None => Self {
                date,
                profit: String::new(),
                notes: String::new(),
                photo: None,
            },
        }
    }

    /// Applies a finished encode if `ticket` still belongs to the open selection of this day.
    ///
    /// A failed encode leaves the draft as it was and returns the error.
    pub fn apply_photo(
        &mut self,
        selection: &Selection,
        ticket: &SelectionTicket,
        encoded: Result<String, PhotoError>,
    ) -> Result<PhotoApply, PhotoError> {
        if !selection.is_current(ticket) || ticket.date() != self.date {
            return Ok(PhotoApply::Stale);
        }
        self.photo = Some(encoded?);
        Ok(PhotoApply::Applied)
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    /// Whether the typed profit is a negative number, for live styling of the input.
    pub fn profit_is_negative(&self) -> bool {
        parse_profit(&self.profit).is_some_and(|p| p < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn blank_draft_without_entry() {
        let draft = EntryDraft::for_entry(day(1), None);
        assert_eq!(draft.profit, "");
        assert_eq!(draft.notes, "");
        assert_eq!(draft.photo, None);
    }

    #[test]
    fn draft_mirrors_existing_entry() {
        let entry = Entry::from_raw("-42.5", "loss day", Some(PHOTO.to_string()));
        let draft = EntryDraft::for_entry(day(1), Some(&entry));
        assert_eq!(draft.profit, "-42.5");
        assert_eq!(draft.notes, "loss day");
        assert_eq!(draft.photo.as_deref(), Some(PHOTO));
        assert!(draft.profit_is_negative());
    }

    #[test]
    fn applies_photo_for_current_selection() {
        let mut selection = Selection::new();
        let ticket = selection.select(day(1));
        let mut draft = EntryDraft::for_entry(day(1), None);

        let outcome = draft
            .apply_photo(&selection, &ticket, Ok(PHOTO.to_string()))
            .unwrap();
        assert_eq!(outcome, PhotoApply::Applied);
        assert_eq!(draft.photo.as_deref(), Some(PHOTO));
    }

    #[test]
    fn ignores_late_photo_after_navigation() {
        let mut selection = Selection::new();
        let ticket = selection.select(day(1));
        let mut draft = EntryDraft::for_entry(day(2), None);
        selection.select(day(2));

        let outcome = draft
            .apply_photo(&selection, &ticket, Ok(PHOTO.to_string()))
            .unwrap();
        assert_eq!(outcome, PhotoApply::Stale);
        assert_eq!(draft.photo, None);
    }

    #[test]
    fn failed_encode_keeps_previous_photo() {
        let mut selection = Selection::new();
        let ticket = selection.select(day(1));
        let entry = Entry::from_raw("", "", Some(PHOTO.to_string()));
        let mut draft = EntryDraft::for_entry(day(1), Some(&entry));

        let result = draft.apply_photo(&selection, &ticket, Err(PhotoError::UnsupportedFormat));
        assert!(matches!(result, Err(PhotoError::UnsupportedFormat)));
        assert_eq!(draft.photo.as_deref(), Some(PHOTO));
    }

    #[test]
    fn non_numeric_profit_is_not_negative() {
        let mut draft = EntryDraft::for_entry(day(1), None);
        draft.profit = "-".to_string();
        assert!(!draft.profit_is_negative());
        draft.profit = "-0.01".to_string();
        assert!(draft.profit_is_negative());
    }
}
