use std::fmt;

use crate::presentation::view_models::WaterViewModel;

impl fmt::Display for WaterViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        if let Some(humidity) = self.checked_humidity {
            writeln!(f, "Checked humidity: {:.2}", humidity)?;
        }
        Ok(())
    }
}
