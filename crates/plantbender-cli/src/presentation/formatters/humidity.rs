use plantbender_types::{Normalization, Percentage};

use crate::presentation::view_models::HumidityUnit;

pub fn unit_of(normalization: Normalization) -> HumidityUnit {
    match normalization {
        Normalization::Scaled { .. } => HumidityUnit::Percent,
        Normalization::Raw => HumidityUnit::Raw,
    }
}

/// Column header for the history table.
pub fn column_header(unit: HumidityUnit) -> &'static str {
    match unit {
        HumidityUnit::Percent => "Humidity (%)",
        HumidityUnit::Raw => "Humidity (raw)",
    }
}

/// Headline label: `50.05%`, `512` or `No data`.
pub fn headline(percentage: Percentage) -> String {
    match percentage {
        Percentage::Scaled { .. } => format!("{}%", percentage),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline() {
        let scaled = Normalization::default().apply(Some(512));
        assert_eq!(headline(scaled), "50.05%");
        assert_eq!(headline(Normalization::Raw.apply(Some(512))), "512");
        assert_eq!(headline(Percentage::NoData), "No data");
    }
}
