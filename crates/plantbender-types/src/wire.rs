//! JSON wire format of the records endpoint.
//!
//! The backend returns an array of `{ "humidity": int|null, "measurement_time": string }`.
//! Unknown keys are ignored and a missing `humidity` is a valid "no data" sample.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, Result};
use crate::record::HumidityRecord;

const NAIVE_PATTERNS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO-8601 instant.
///
/// Offsets are honoured; timestamps without an offset are taken as UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(value, pattern).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidTimestamp(value.to_string()))
}

/// Decodes a records response body.
pub fn decode_records(body: &[u8]) -> serde_json::Result<Vec<HumidityRecord>> {
    serde_json::from_slice(body)
}

pub(crate) mod instant {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::percentage::Normalization;

    #[test]
    fn test_parse_instant_variants() {
        let expected = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(parse_instant("2024-06-01T12:00:00Z").unwrap(), expected);
        assert_eq!(parse_instant("2024-06-01T14:00:00+02:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-06-01T12:00:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-06-01 12:00:00.000").unwrap(), expected);
        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = br#"[
            {"humidity": 512, "measurement_time": "2024-06-01T12:00:00Z", "device": "bed-3", "rssi": -71}
        ]"#;
        let records = decode_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw_value(), Some(512));
    }

    #[test]
    fn test_decode_tolerates_absent_humidity() {
        let body = br#"[
            {"humidity": null, "measurement_time": "2024-06-01T12:00:00Z"},
            {"measurement_time": "2024-06-01T12:05:00Z"}
        ]"#;
        let records = decode_records(body).unwrap();
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.raw_value(), None);
            assert_eq!(record.percentage(Normalization::default()).to_string(), "No data");
        }
    }

    #[test]
    fn test_decode_rejects_structurally_invalid_payload() {
        assert!(decode_records(br#"{"humidity": 1}"#).is_err());
        assert!(decode_records(br#"[{"humidity": 1}]"#).is_err());
        assert!(decode_records(b"<html>").is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let record = HumidityRecord::new(None, parse_instant("2024-06-01T12:00:00Z").unwrap());
        let json = serde_json::to_value(&record).unwrap();
        insta::assert_json_snapshot!(json, @r#"
        {
          "humidity": null,
          "measurement_time": "2024-06-01T12:00:00Z"
        }
        "#);
    }
}
