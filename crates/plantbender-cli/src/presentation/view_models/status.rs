use serde::Serialize;

use super::common::GaugeViewModel;
use super::history::HumidityUnit;

#[derive(Debug, Serialize)]
pub struct StatusViewModel {
    pub unit: HumidityUnit,
    /// Value the watering rule is checked against (`0.0` when nothing usable).
    pub current_humidity: f64,
    pub humidity_label: String,
    pub measured_at: Option<String>,
    pub gauge: GaugeViewModel,
    pub watering_permitted: bool,
    pub threshold: f64,
    pub record_count: usize,
}
