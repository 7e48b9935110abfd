use chrono::SecondsFormat;
use plantbender_runtime::ViewSnapshot;
use plantbender_types::{HumidityRecord, Normalization};

use crate::args::hints::cmd;
use crate::presentation::formatters;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, HistoryViewModel, HumidityRowViewModel, StatusBadge,
};

pub const EMPTY_MESSAGE: &str = "No data available";

pub fn present_row(record: &HumidityRecord, normalization: Normalization) -> HumidityRowViewModel {
    let percentage = record.percentage(normalization);
    HumidityRowViewModel {
        date: record.date_label(),
        time: record.time_label(),
        humidity: percentage.to_string(),
        value: percentage.value(),
        timestamp: record
            .timestamp()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// Rows in display order (newest first).
pub fn present_rows(snapshot: &ViewSnapshot, normalization: Normalization) -> Vec<HumidityRowViewModel> {
    snapshot
        .newest_first()
        .map(|record| present_row(record, normalization))
        .collect()
}

pub fn present_history(
    snapshot: &ViewSnapshot,
    normalization: Normalization,
    limit: Option<usize>,
) -> CommandResultViewModel<HistoryViewModel> {
    let total = snapshot.records.len();
    let mut records = present_rows(snapshot, normalization);
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let shown = records.len();
    let content = HistoryViewModel {
        unit: formatters::unit_of(normalization),
        total,
        records,
    };

    if total == 0 {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning(EMPTY_MESSAGE))
            .with_suggestion(
                Guidance::new("Check the backend settings").with_command(cmd::CONFIG_SHOW),
            );
    }

    let label = if shown < total {
        format!("Showing {} of {} records", shown, total)
    } else {
        format!("{} records", total)
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::info(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantbender_testing::fixtures;
    use std::sync::Arc;

    fn snapshot(value: &serde_json::Value) -> ViewSnapshot {
        ViewSnapshot {
            records: Arc::from(fixtures::records_from(value)),
            is_loading: false,
        }
    }

    #[test]
    fn test_rows_are_newest_first() {
        let rows = present_rows(&snapshot(&fixtures::dry_history()), Normalization::default());
        let labels: Vec<&str> = rows.iter().map(|r| r.humidity.as_str()).collect();
        assert_eq!(labels, vec!["29.33", "68.43", "No data", "87.98"]);
        assert_eq!(rows[0].timestamp, "2024-06-01T09:00:00Z");
        assert_eq!(rows[2].value, None);
    }

    #[test]
    fn test_limit_keeps_newest() {
        let result = present_history(
            &snapshot(&fixtures::dry_history()),
            Normalization::default(),
            Some(1),
        );
        assert_eq!(result.content.total, 4);
        assert_eq!(result.content.records.len(), 1);
        assert_eq!(result.content.records[0].humidity, "29.33");
        assert_eq!(
            result.badge.map(|b| b.label).as_deref(),
            Some("Showing 1 of 4 records")
        );
    }

    #[test]
    fn test_empty_history_suggests_config() {
        let result = present_history(
            &snapshot(&serde_json::json!([])),
            Normalization::default(),
            None,
        );
        assert!(result.content.records.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.badge.map(|b| b.label).as_deref(), Some(EMPTY_MESSAGE));
    }
}
