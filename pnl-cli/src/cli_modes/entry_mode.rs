use crate::{cli::resolve_date, render::Renderer};
use anyhow::Result;
use chrono::NaiveDate;
use pnl_core::{EntryDraft, Ledger, PhotoApply, Selection, photo::encode_file};
use std::path::PathBuf;
use tracing::debug;

/// Fields given to `pnl set`. `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct SetFields {
    pub profit: Option<String>,
    pub notes: Option<String>,
    pub photo: Option<PathBuf>,
    pub no_photo: bool,
}

pub fn entry_mode(renderer: &Renderer, ledger: &Ledger, today: NaiveDate, date: &str) -> Result<()> {
    let date = resolve_date(date, today)?;
    let entry = ledger.entry_for(date);
    renderer.print_entry(date, entry.as_ref(), |a| ledger.format_amount(a));
    Ok(())
}

pub async fn set_mode(
    renderer: &Renderer,
    ledger: &Ledger,
    today: NaiveDate,
    date: &str,
    fields: SetFields,
) -> Result<()> {
    let date = resolve_date(date, today)?;
    let mut selection = Selection::new();
    let ticket = selection.select(date);

    let mut draft = ledger.draft_for(date);
    overlay(&mut draft, &fields);
    if let Some(path) = &fields.photo {
        let encoded = encode_file(path).await;
        if draft.apply_photo(&selection, &ticket, encoded)? == PhotoApply::Stale {
            debug!(%date, "photo arrived after the day was closed");
        }
    }

    let saved = ledger.save_draft(&draft)?;
    selection.close();

    match saved {
        Some(entry) => renderer.print_entry(date, Some(&entry), |a| ledger.format_amount(a)),
        None => renderer.print_info(&format!("Entry for {date} removed.")),
    }
    Ok(())
}

pub fn remove_photo_mode(
    renderer: &Renderer,
    ledger: &Ledger,
    today: NaiveDate,
    date: &str,
) -> Result<()> {
    let date = resolve_date(date, today)?;
    if ledger.entry_for(date).is_none() {
        renderer.print_info(&format!("No entry for {date}."));
        return Ok(());
    }
    match ledger.remove_photo(date)? {
        Some(entry) => renderer.print_entry(date, Some(&entry), |a| ledger.format_amount(a)),
        None => renderer.print_info(&format!("Entry for {date} removed.")),
    }
    Ok(())
}

fn overlay(draft: &mut EntryDraft, fields: &SetFields) {
    if let Some(profit) = &fields.profit {
        draft.profit = profit.clone();
    }
    if let Some(notes) = &fields.notes {
        draft.notes = notes.clone();
    }
    if fields.no_photo {
        draft.clear_photo();
    }
}
