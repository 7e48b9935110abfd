use serde::Serialize;

/// How the humidity column should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HumidityUnit {
    Percent,
    Raw,
}

#[derive(Debug, Clone, Serialize)]
pub struct HumidityRowViewModel {
    pub date: String,
    pub time: String,
    /// Display text: `"50.05"`, `"512"` or `"No data"`.
    pub humidity: String,
    pub value: Option<f64>,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryViewModel {
    pub unit: HumidityUnit,
    /// Number of records returned by the backend before `--limit`.
    pub total: usize,
    pub records: Vec<HumidityRowViewModel>,
}
