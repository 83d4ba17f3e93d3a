use chrono::NaiveDate;

/// Which day the user currently has open.
///
/// Every change of selection bumps a generation counter, so work started for an
/// earlier selection can tell it arrived too late.
#[derive(Debug, Default)]
pub struct Selection {
    date: Option<NaiveDate>,
    generation: u64,
}

/// Handed out by [`Selection::select`]; attach it to any work started for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    date: NaiveDate,
    generation: u64,
}

impl SelectionTicket {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, date: NaiveDate) -> SelectionTicket {
        self.generation += 1;
        self.date = Some(date);
        SelectionTicket {
            date,
            generation: self.generation,
        }
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.date = None;
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.date
    }

    /// True only for the ticket of the latest selection, while it is still open.
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.date == Some(ticket.date) && self.generation == ticket.generation
    }
}
