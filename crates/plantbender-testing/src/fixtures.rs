//! Sample payloads shaped like the records endpoint's responses.

use plantbender_types::{HumidityRecord, parse_instant};
use serde_json::{Value, json};

pub const RECORDS_CODE: &str = "test-records-code==";
pub const ACTIVATION_CODE: &str = "test-activation-code";

/// Single reading from the documented end-to-end scenario (512 of 1023).
pub fn single_reading() -> Value {
    json!([{ "humidity": 512, "measurement_time": "2024-06-01T12:00:00Z" }])
}

/// Oldest first, like the backend. The newest sample is dry (~29%).
pub fn dry_history() -> Value {
    json!([
        { "humidity": 900, "measurement_time": "2024-06-01T06:00:00Z" },
        { "humidity": null, "measurement_time": "2024-06-01T07:00:00Z" },
        { "humidity": 700, "measurement_time": "2024-06-01T08:00:00Z", "sensor": "bed-1" },
        { "humidity": 300, "measurement_time": "2024-06-01T09:00:00Z" }
    ])
}

/// Newest sample is wet (~88%).
pub fn wet_history() -> Value {
    json!([
        { "humidity": 200, "measurement_time": "2024-06-01T06:00:00Z" },
        { "humidity": 900, "measurement_time": "2024-06-01T09:00:00Z" }
    ])
}

pub fn records_from(value: &Value) -> Vec<HumidityRecord> {
    serde_json::from_value(value.clone()).expect("fixture is a valid records payload")
}

pub fn record(raw: Option<i64>, timestamp: &str) -> HumidityRecord {
    HumidityRecord::new(raw, parse_instant(timestamp).expect("fixture timestamp"))
}
