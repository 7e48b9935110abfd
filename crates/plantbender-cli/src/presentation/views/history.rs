use std::fmt;

use crate::presentation::formatters;
use crate::presentation::presenters::history::EMPTY_MESSAGE;
use crate::presentation::view_models::HistoryViewModel;

pub struct HistoryView<'a> {
    data: &'a HistoryViewModel,
}

impl<'a> HistoryView<'a> {
    pub fn new(data: &'a HistoryViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for HistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.records.is_empty() {
            return writeln!(f, "{}", EMPTY_MESSAGE);
        }

        writeln!(
            f,
            "{:<12} {:<10} {}",
            "DATE",
            "TIME",
            formatters::column_header(self.data.unit).to_uppercase()
        )?;
        writeln!(f, "{}", "-".repeat(38))?;

        for row in &self.data.records {
            writeln!(f, "{:<12} {:<10} {}", row.date, row.time, row.humidity)?;
        }

        Ok(())
    }
}

impl fmt::Display for HistoryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&HistoryView::new(self), f)
    }
}
