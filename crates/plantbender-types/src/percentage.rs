use std::fmt;

/// Full-scale value of the 10-bit soil sensor ADC.
pub const DEFAULT_SCALE_MAX: u32 = 1023;

/// How a raw sensor reading is turned into a display percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// `raw / max * 100`, rounded up to two decimals.
    Scaled { max: u32 },
    /// No scale configured: show the raw integer.
    Raw,
}

impl Default for Normalization {
    fn default() -> Self {
        Self::Scaled {
            max: DEFAULT_SCALE_MAX,
        }
    }
}

impl Normalization {
    /// Returns `None` for a zero full-scale value.
    pub fn scaled(max: u32) -> Option<Self> {
        (max > 0).then_some(Self::Scaled { max })
    }

    /// Maps an optional configured maximum to a mode; absent or zero means raw.
    pub fn from_scale_max(max: Option<u32>) -> Self {
        max.and_then(Self::scaled).unwrap_or(Self::Raw)
    }

    pub fn apply(&self, raw: Option<i64>) -> Percentage {
        let Some(raw) = raw else {
            return Percentage::NoData;
        };

        match *self {
            Self::Scaled { max } => Percentage::Scaled {
                hundredths: ceil_hundredths(raw, max),
            },
            Self::Raw => Percentage::Raw(raw),
        }
    }
}

/// Display value of one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    NoData,
    /// Normalized value stored as hundredths of a percent. Wide enough for
    /// any `i64` reading over any `u32` scale.
    Scaled { hundredths: i128 },
    Raw(i64),
}

impl Percentage {
    pub const NO_DATA_LABEL: &'static str = "No data";

    /// Numeric value for gauges and thresholds. `None` for [`Percentage::NoData`].
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::NoData => None,
            Self::Scaled { hundredths } => Some(hundredths as f64 / 100.0),
            Self::Raw(raw) => Some(raw as f64),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NoData => f.write_str(Self::NO_DATA_LABEL),
            Self::Scaled { hundredths } => {
                let sign = if hundredths < 0 { "-" } else { "" };
                let abs = hundredths.unsigned_abs();
                write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
            }
            Self::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// `raw / max * 100` rounded away from zero at the second decimal.
///
/// Computed as an exact integer ceiling of `raw * 10_000 / max`, so no reading
/// saturates or picks up binary floating point error.
fn ceil_hundredths(raw: i64, max: u32) -> i128 {
    let numerator = i128::from(raw) * 10_000;
    let max = i128::from(max);
    let whole = numerator / max;
    if numerator % max == 0 {
        whole
    } else {
        whole + numerator.signum()
    }
}
