use super::editor_utils::{edit_in_buffer, resolve_editor};
use crate::{cli::resolve_date, render::Renderer};
use anyhow::Result;
use chrono::NaiveDate;
use pnl_core::Ledger;

pub fn edit_mode(renderer: &Renderer, ledger: &Ledger, today: NaiveDate, date: &str) -> Result<()> {
    let date = resolve_date(date, today)?;
    let mut draft = ledger.draft_for(date);

    let editor = resolve_editor(&ledger.config.editor);
    let edited = edit_in_buffer(&editor, &draft.notes)?;
    let notes = edited_notes(&edited);
    if notes == draft.notes {
        renderer.print_info("Notes unchanged, nothing saved.");
        return Ok(());
    }

    draft.notes = notes.to_string();
    let saved = ledger.save_draft(&draft)?;
    renderer.print_entry(date, saved.as_ref(), |a| ledger.format_amount(a));
    Ok(())
}

/// Editors append a final newline on save; drop exactly one.
fn edited_notes(edited: &str) -> &str {
    edited.strip_suffix('\n').unwrap_or(edited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_trailing_newline_is_dropped() {
        assert_eq!(edited_notes("line one\nline two\n\n"), "line one\nline two\n");
        assert_eq!(edited_notes("single line\n"), "single line");
        assert_eq!(edited_notes("no newline"), "no newline");
        assert_eq!(edited_notes(""), "");
    }
}
