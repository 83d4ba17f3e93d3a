use crate::render::ColorMode;
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use clap::{ArgGroup, Parser, Subcommand};
use pnl_core::YearMonth;
use std::path::PathBuf;

/// pnl — Trading P&L calendar
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shows a month grid with daily results and the monthly total (default: current month)
    Show {
        /// Month to show, e.g. `2024-03`
        month: Option<YearMonth>,
        /// Show the month before
        #[arg(long, conflicts_with = "next")]
        prev: bool,
        /// Show the month after
        #[arg(long)]
        next: bool,
    },
    /// Shows the entry of one day (e.g. `pnl entry yesterday`, `pnl entry 2024-03-15`)
    Entry { date: String },
    /// Saves fields of one day. Fields not given keep their stored value.
    /// An entry left with no profit, no notes and no photo is removed.
    #[command(group(ArgGroup::new("fields").required(true).multiple(true)))]
    Set {
        date: String,
        /// Profit of the day, e.g. `120.5` or `-40`. An empty value clears it.
        #[arg(long, allow_hyphen_values = true, group = "fields")]
        profit: Option<String>,
        /// Free text notes
        #[arg(long, group = "fields")]
        notes: Option<String>,
        /// Attach an image file as the day's photo
        #[arg(long, conflicts_with = "no_photo", group = "fields")]
        photo: Option<PathBuf>,
        /// Drop the attached photo
        #[arg(long, group = "fields")]
        no_photo: bool,
    },
    /// Opens your $EDITOR on the notes of one day
    Edit { date: String },
    /// Removes the photo of one day, keeping the rest of the entry
    RemovePhoto { date: String },
    /// Prints the path of the entries file
    Path,
}

/// Accepts `today`, `yesterday`, `tomorrow` or `YYYY-MM-DD`.
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        "tomorrow" => Ok(today + Duration::days(1)),
        _ => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .with_context(|| format!("'{input}' is not a date, expected YYYY-MM-DD")),
    }
}
