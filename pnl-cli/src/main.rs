mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Command};
use pnl_core::Ledger;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pnl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log level comes from `PNL_LOG` (e.g. `PNL_LOG=debug`), defaulting to warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("PNL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let ledger = Ledger::new()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: "%a, %d %b %Y".to_string(),
        use_color: cli.color.use_color(),
    }));
    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Command::Show {
        month: None,
        prev: false,
        next: false,
    }) {
        Command::Show { month, prev, next } => {
            cli_modes::show_mode(&renderer, &ledger, today, month, prev, next)
        }
        Command::Entry { date } => cli_modes::entry_mode(&renderer, &ledger, today, &date),
        Command::Set {
            date,
            profit,
            notes,
            photo,
            no_photo,
        } => {
            let fields = cli_modes::SetFields {
                profit,
                notes,
                photo,
                no_photo,
            };
            cli_modes::set_mode(&renderer, &ledger, today, &date, fields).await
        }
        Command::Edit { date } => cli_modes::edit_mode(&renderer, &ledger, today, &date),
        Command::RemovePhoto { date } => {
            cli_modes::remove_photo_mode(&renderer, &ledger, today, &date)
        }
        Command::Path => {
            renderer.print_info(&format!("{}", ledger.store().slot().path().display()));
            Ok(())
        }
    }
}
