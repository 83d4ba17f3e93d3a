use super::theme::OneDark;
use chrono::NaiveDate;
use pnl_core::{DayCell, Entry, MonthGrid, photo::mime_of_encoded, weekday_headers};
use termimad::MadSkin;

/// Width of one column when printing without colors.
const PLAIN_CELL_WIDTH: usize = 16;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::calendar_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{}", strip_markup(md));
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// Prints the month heading, the week grid and the monthly total.
    pub fn print_month(&self, label: &str, grid: &MonthGrid, money: impl Fn(Option<f64>) -> String) {
        if self.opts.use_color {
            self.skin.print_text(&format!("# {label}\n"));
            self.skin.print_text(&grid_table(grid, &money));
        } else {
            println!("{label}");
            print!("{}", plain_grid(grid, &money));
        }

        let total = money(Some(grid.total.amount));
        let total = if grid.total.negative {
            format!("~~{total}~~")
        } else {
            format!("**{total}**")
        };
        self.print_md(&format!("Monthly: {total}\n"));
    }

    /// Prints the detail of one day, or a notice when it has no entry.
    pub fn print_entry(
        &self,
        date: NaiveDate,
        entry: Option<&Entry>,
        money: impl Fn(Option<f64>) -> String,
    ) {
        let heading = date.format(&self.opts.date_format).to_string();
        let Some(entry) = entry else {
            self.print_info(&format!("No entry for {heading}."));
            return;
        };

        let mut md = format!("## {heading}\n");
        match entry.profit {
            Some(p) if p < 0.0 => md.push_str(&format!("Profit: ~~{}~~\n", money(Some(p)))),
            Some(p) => md.push_str(&format!("Profit: **{}**\n", money(Some(p)))),
            None => md.push_str("Profit: *none*\n"),
        }
        if let Some(photo) = &entry.photo {
            let mime = mime_of_encoded(photo).unwrap_or("unknown format");
            md.push_str(&format!("Photo: `{mime}`\n"));
        }
        if !entry.notes.trim().is_empty() {
            md.push('\n');
            md.push_str(entry.notes.trim_end());
            md.push('\n');
        }
        self.print_md(&md);
    }
}

fn grid_table(grid: &MonthGrid, money: &impl Fn(Option<f64>) -> String) -> String {
    let rule = "|:-:".repeat(7) + "|\n";
    let header: String = weekday_headers()
        .map(|w| {
            if w.is_weekend() {
                format!("|*{}*", w.label())
            } else {
                format!("|{}", w.label())
            }
        })
        .collect();

    let mut md = format!("{rule}{header}|\n{rule}");
    for week in grid.weeks() {
        for cell in week {
            md.push('|');
            md.push_str(&md_cell(cell, money));
        }
        md.push_str("|\n");
    }
    md.push_str("|-\n");
    md
}

fn md_cell(cell: &DayCell, money: &impl Fn(Option<f64>) -> String) -> String {
    let day = cell.date.format("%-d").to_string();
    let mut parts = vec![if cell.outside { format!("*{day}*") } else { day }];
    if cell.has_profit() {
        let amount = money(cell.profit());
        parts.push(if cell.negative() {
            format!("~~{amount}~~")
        } else {
            format!("**{amount}**")
        });
    }
    if cell.has_note() {
        parts.push("`✎`".to_string());
    }
    if cell.has_photo() {
        parts.push("`▣`".to_string());
    }
    parts.join(" ")
}

fn plain_cell(cell: &DayCell, money: &impl Fn(Option<f64>) -> String) -> String {
    let day = cell.date.format("%-d").to_string();
    let mut text = if cell.outside { format!("({day})") } else { day };
    if cell.has_profit() {
        text.push(' ');
        text.push_str(&money(cell.profit()));
    }
    if cell.has_note() {
        text.push_str(" ✎");
    }
    if cell.has_photo() {
        text.push_str(" ▣");
    }
    text
}

fn plain_grid(grid: &MonthGrid, money: &impl Fn(Option<f64>) -> String) -> String {
    let mut out: String = weekday_headers()
        .map(|w| format!("{:<width$}", w.label(), width = PLAIN_CELL_WIDTH))
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| format!("{:<width$}", plain_cell(cell, money), width = PLAIN_CELL_WIDTH))
            .collect();
        out.push_str(row.join(" ").trim_end());
        out.push('\n');
    }
    out
}

/// Drops the emphasis markers used for coloring.
fn strip_markup(md: &str) -> String {
    md.replace("~~", "").replace(['*', '`'], "")
}
