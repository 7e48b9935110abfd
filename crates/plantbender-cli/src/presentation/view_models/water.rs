use plantbender_runtime::NotificationLevel;
use plantbender_types::Activation;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WaterViewModel {
    pub activation: Activation,
    pub payload: String,
    pub message: String,
    pub level: NotificationLevel,
    /// Humidity checked before starting, if a check was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_humidity: Option<f64>,
}
