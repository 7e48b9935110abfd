//! Watering rule and activation commands.

use plantbender_client::{ApiError, PlantApi};
use plantbender_types::{Activation, HumidityRecord, Normalization};
use tracing::{info, warn};

use crate::notification::Notification;

/// Watering is permitted only strictly below this humidity percentage.
pub const WATERING_THRESHOLD: f64 = 50.0;

/// Percentage of the most recent record; `0.0` when there is none or it has no data.
pub fn current_humidity(records: &[HumidityRecord], normalization: Normalization) -> f64 {
    records
        .last()
        .and_then(|record| record.percentage(normalization).value())
        .unwrap_or(0.0)
}

pub fn watering_permitted(current_humidity: f64) -> bool {
    current_humidity < WATERING_THRESHOLD
}

/// Send one activation command and describe the outcome.
pub async fn send_activation<A>(api: &A, activation: Activation) -> Notification
where
    A: PlantApi + ?Sized,
{
    match api.send_activation(activation).await {
        Ok(()) => {
            info!(%activation, "activation accepted");
            Notification::success(format!(
                "Request successful with value: {}",
                activation.as_payload()
            ))
        }
        Err(err) => {
            warn!(%activation, error = %err, "activation failed");
            Notification::error(failure_message(&err))
        }
    }
}

fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(_) => "Request failed".to_string(),
        ApiError::Network(reason) => format!("Network failure: {}", reason),
        other => format!("Request failed: {}", other.reason()),
    }
}

/// Local on/off state behind the watering button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WateringToggle {
    is_on: bool,
}

impl WateringToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn label(&self) -> &'static str {
        if self.is_on {
            "Stop watering"
        } else {
            "Water the plant!"
        }
    }

    /// Command the next press would send.
    pub fn next_activation(&self) -> Activation {
        Activation::from_on(!self.is_on)
    }

    /// Flip the state if watering is permitted at `current_humidity`.
    pub fn flip(&mut self, current_humidity: f64) -> Result<Activation, Notification> {
        if !watering_permitted(current_humidity) {
            return Err(Notification::warning(format!(
                "Watering is only available below {}% humidity",
                WATERING_THRESHOLD
            )));
        }

        self.is_on = !self.is_on;
        Ok(Activation::from_on(self.is_on))
    }

    /// Flip and send. Every press issues its own request.
    pub async fn press<A>(&mut self, api: &A, current_humidity: f64) -> Notification
    where
        A: PlantApi + ?Sized,
    {
        match self.flip(current_humidity) {
            Ok(activation) => send_activation(api, activation).await,
            Err(rejection) => rejection,
        }
    }
}
