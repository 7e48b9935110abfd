//! Custom assertions for plantbender-specific validation.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that JSON output contains expected number of history rows.
pub fn assert_record_count(json: &Value, expected: usize) -> Result<()> {
    let rows = json["content"]["records"]
        .as_array()
        .context("Expected 'content.records' array in JSON")?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} records, got {}", expected, rows.len());
    }

    Ok(())
}

/// Assert that history rows are ordered newest first.
pub fn assert_newest_first(json: &Value) -> Result<()> {
    let rows = json["content"]["records"]
        .as_array()
        .context("Expected 'content.records' array in JSON")?;

    let stamps: Vec<&str> = rows
        .iter()
        .map(|row| row["timestamp"].as_str().context("row without timestamp"))
        .collect::<Result<_>>()?;

    if stamps.windows(2).any(|pair| pair[0] < pair[1]) {
        anyhow::bail!("Rows are not newest first: {:?}", stamps);
    }

    Ok(())
}
