use serde::Serialize;

use super::history::HumidityUnit;

/// Effective configuration with access codes masked.
#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub file_exists: bool,
    pub base_url: String,
    pub records_code: String,
    pub activation_code: String,
    pub timeout_secs: u64,
    pub scale_max: u32,
    pub unit: HumidityUnit,
}
