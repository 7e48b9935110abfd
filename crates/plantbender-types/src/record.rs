use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::percentage::{Normalization, Percentage};

/// `yyyy-MM-dd`
pub const DATE_PATTERN: &str = "%Y-%m-%d";
/// `HH:mm:ss`
pub const TIME_PATTERN: &str = "%H:%M:%S";

/// One soil humidity sample as reported by the backend.
///
/// Records are immutable: they are built once (normally by deserializing a
/// fetch response) and replaced wholesale by the next fetch. Display fields
/// are derived on every call and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumidityRecord {
    #[serde(rename = "humidity", default)]
    raw_value: Option<i64>,

    #[serde(rename = "measurement_time", with = "crate::wire::instant")]
    timestamp: DateTime<Utc>,
}

impl HumidityRecord {
    pub fn new(raw_value: Option<i64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            raw_value,
            timestamp,
        }
    }

    pub fn raw_value(&self) -> Option<i64> {
        self.raw_value
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn percentage(&self, normalization: Normalization) -> Percentage {
        normalization.apply(self.raw_value)
    }

    /// Measurement date in the viewer's local zone.
    pub fn date_label(&self) -> String {
        self.date_label_in(&Local)
    }

    /// Measurement time of day in the viewer's local zone.
    pub fn time_label(&self) -> String {
        self.time_label_in(&Local)
    }

    pub fn date_label_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.timestamp.with_timezone(tz).format(DATE_PATTERN).to_string()
    }

    pub fn time_label_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.timestamp.with_timezone(tz).format(TIME_PATTERN).to_string()
    }
}
