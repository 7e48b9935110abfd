use plantbender_runtime::NotificationLevel;
use serde::Serialize;

use super::common::GaugeViewModel;
use super::history::HumidityRowViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct ToggleViewModel {
    pub label: String,
    pub enabled: bool,
    pub is_on: bool,
    /// Why the button is disabled.
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationViewModel {
    pub message: String,
    pub level: NotificationLevel,
}

/// One frame of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    pub gauge: GaugeViewModel,
    pub toggle: ToggleViewModel,
    pub rows: Vec<HumidityRowViewModel>,
    pub humidity_header: String,
    /// Spinner line while the fetch is in flight.
    pub loading: Option<String>,
    pub empty_message: String,
    pub notification: Option<NotificationViewModel>,
    /// Animation phase for the background.
    pub frame: u64,
}
