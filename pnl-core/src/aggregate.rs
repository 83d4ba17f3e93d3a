use crate::month::YearMonth;
use crate::store::Entries;

/// Monthly profit and its sign, for styling the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotal {
    pub amount: f64,
    pub negative: bool,
}

impl MonthTotal {
    pub fn of(amount: f64) -> Self {
        Self {
            amount,
            negative: amount < 0.0,
        }
    }
}

/// Sums the profit of every entry of `month`. Entries without a profit count as zero.
pub fn sum_month(entries: &Entries, month: YearMonth) -> f64 {
    let prefix = month.prefix();
    entries
        .iter()
        .filter(|(key, _)| key.month_prefix() == prefix)
        .map(|(_, entry)| entry.profit.unwrap_or(0.0))
        .sum()
}
