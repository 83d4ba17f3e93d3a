use crate::render::Renderer;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use pnl_core::{Ledger, YearMonth};

pub fn show_mode(
    renderer: &Renderer,
    ledger: &Ledger,
    today: NaiveDate,
    month: Option<YearMonth>,
    prev: bool,
    next: bool,
) -> Result<()> {
    let month = match month {
        Some(month) => month,
        None => YearMonth::containing(&today).context("today is outside years 1 to 9999")?,
    };
    let month = if prev {
        month.prev().context("no month before year 1")?
    } else if next {
        month.next().context("no month after year 9999")?
    } else {
        month
    };

    let grid = ledger.grid(month);
    renderer.print_month(&ledger.month_label(month), &grid, |a| {
        ledger.format_amount(a)
    });
    Ok(())
}
