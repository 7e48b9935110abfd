use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, HumidityUnit};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let origin = if data.file_exists { "" } else { " (not created yet)" };

        writeln!(f, "Config file:      {}{}", data.config_path, origin)?;
        writeln!(f, "Base URL:         {}", data.base_url)?;
        writeln!(f, "Records code:     {}", data.records_code)?;
        writeln!(f, "Activation code:  {}", data.activation_code)?;
        writeln!(f, "Timeout:          {}s", data.timeout_secs)?;

        match data.unit {
            HumidityUnit::Percent => writeln!(f, "Scale max:        {}", data.scale_max),
            HumidityUnit::Raw => writeln!(f, "Scale max:        0 (raw readings)"),
        }
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&ConfigView::new(self), f)
    }
}
