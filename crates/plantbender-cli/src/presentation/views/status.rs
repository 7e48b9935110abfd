use std::fmt;

use crate::presentation::formatters;
use crate::presentation::view_models::StatusViewModel;

const BAR_WIDTH: usize = 24;

pub struct StatusView<'a> {
    data: &'a StatusViewModel,
}

impl<'a> StatusView<'a> {
    pub fn new(data: &'a StatusViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for StatusView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;

        writeln!(
            f,
            "Humidity:  {:<8} {}",
            data.humidity_label,
            formatters::text_bar(data.gauge.fraction, BAR_WIDTH)
        )?;
        writeln!(
            f,
            "Measured:  {}",
            data.measured_at.as_deref().unwrap_or("(never)")
        )?;

        let rule = if data.watering_permitted {
            format!("permitted (below {}%)", data.threshold)
        } else {
            format!("not permitted (at or above {}%)", data.threshold)
        };
        writeln!(f, "Watering:  {}", rule)?;
        writeln!(f, "Records:   {}", data.record_count)
    }
}

impl fmt::Display for StatusViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&StatusView::new(self), f)
    }
}
