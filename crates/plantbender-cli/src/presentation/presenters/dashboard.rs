use plantbender_runtime::{
    Notification, ViewSnapshot, WATERING_THRESHOLD, WateringToggle, current_humidity,
    watering_permitted,
};
use plantbender_types::{Normalization, Percentage};

use super::history::{EMPTY_MESSAGE, present_rows};
use super::status::present_gauge;
use crate::presentation::formatters;
use crate::presentation::view_models::{
    DashboardViewModel, NotificationViewModel, ToggleViewModel,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn build_dashboard_view_model(
    snapshot: &ViewSnapshot,
    normalization: Normalization,
    toggle: &WateringToggle,
    notification: Option<&Notification>,
    frame: u64,
) -> DashboardViewModel {
    let humidity = current_humidity(&snapshot.records, normalization);
    let percentage = snapshot
        .latest()
        .map(|record| record.percentage(normalization))
        .unwrap_or(Percentage::NoData);

    let loading = snapshot.is_loading.then(|| {
        let spinner = SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize];
        format!("{} Loading humidity history...", spinner)
    });

    let enabled = watering_permitted(humidity);

    DashboardViewModel {
        title: "PlantBender".to_string(),
        gauge: present_gauge(humidity, formatters::headline(percentage)),
        toggle: ToggleViewModel {
            label: toggle.label().to_string(),
            enabled,
            is_on: toggle.is_on(),
            hint: (!enabled)
                .then(|| format!("Watering is available below {}% humidity", WATERING_THRESHOLD)),
        },
        rows: present_rows(snapshot, normalization),
        humidity_header: formatters::column_header(formatters::unit_of(normalization))
            .to_string(),
        loading,
        empty_message: EMPTY_MESSAGE.to_string(),
        notification: notification.map(|n| NotificationViewModel {
            message: n.message.clone(),
            level: n.level,
        }),
        frame,
    }
}
