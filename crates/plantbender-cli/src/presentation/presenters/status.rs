use chrono::SecondsFormat;
use plantbender_runtime::{
    ViewSnapshot, WATERING_THRESHOLD, current_humidity, watering_permitted,
};
use plantbender_types::{Normalization, Percentage};

use crate::args::hints::cmd;
use crate::presentation::formatters;
use crate::presentation::view_models::{
    CommandResultViewModel, GaugeViewModel, Guidance, StatusBadge, StatusViewModel,
};

pub fn present_gauge(humidity: f64, label: String) -> GaugeViewModel {
    let fraction = formatters::fill_fraction(humidity);
    GaugeViewModel {
        fraction,
        color: formatters::gauge_color(fraction),
        label,
    }
}

pub fn present_status(
    snapshot: &ViewSnapshot,
    normalization: Normalization,
) -> CommandResultViewModel<StatusViewModel> {
    let latest = snapshot.latest();
    let humidity = current_humidity(&snapshot.records, normalization);
    let percentage = latest
        .map(|record| record.percentage(normalization))
        .unwrap_or(Percentage::NoData);
    let label = formatters::headline(percentage);
    let permitted = watering_permitted(humidity);

    let content = StatusViewModel {
        unit: formatters::unit_of(normalization),
        current_humidity: humidity,
        humidity_label: label.clone(),
        measured_at: latest.map(|record| {
            record
                .timestamp()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        }),
        gauge: present_gauge(humidity, label.clone()),
        watering_permitted: permitted,
        threshold: WATERING_THRESHOLD,
        record_count: snapshot.records.len(),
    };

    if latest.is_none() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("No data available"))
            .with_suggestion(
                Guidance::new("Check the backend settings").with_command(cmd::CONFIG_SHOW),
            );
    }

    let result = CommandResultViewModel::new(content);
    if permitted {
        result
            .with_badge(StatusBadge::info(format!("Soil is dry ({})", label)))
            .with_suggestion(Guidance::new("Start watering").with_command(cmd::WATER_START))
    } else {
        result.with_badge(StatusBadge::success(format!("Soil is moist ({})", label)))
    }
}
