use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Numeric cell value.
///
/// Integer metrics (visit counts, actions) stay integral through summation so
/// the serialized payload keeps `5` instead of `5.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Int(i64),
    Float(f64),
}

impl Metric {
    pub const ZERO: Metric = Metric::Int(0);

    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Metric::Int(value) => value as f64,
            Metric::Float(value) => value,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Metric {
    type Output = Metric;

    fn add(self, rhs: Metric) -> Metric {
        match (self, rhs) {
            (Metric::Int(a), Metric::Int(b)) => match a.checked_add(b) {
                Some(sum) => Metric::Int(sum),
                None => Metric::Float(a as f64 + b as f64),
            },
            (a, b) => Metric::Float(saturate(a.as_f64() + b.as_f64())),
        }
    }
}

/// Keeps a float sum representable in JSON.
fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

impl From<i32> for Metric {
    fn from(value: i32) -> Self {
        Metric::Int(i64::from(value))
    }
}

impl From<i64> for Metric {
    fn from(value: i64) -> Self {
        Metric::Int(value)
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Metric::Float(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Int(value) => write!(f, "{value}"),
            Metric::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A single column value of a report row.
///
/// `null` and boolean cells load as [`CellValue::Empty`] and chart as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "RawCell")]
pub enum CellValue {
    Metric(Metric),
    Text(String),
    Empty,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Metric(Metric),
    Text(String),
    Flag(bool),
    Null(()),
}

impl From<RawCell> for CellValue {
    fn from(raw: RawCell) -> Self {
        match raw {
            RawCell::Metric(metric) => CellValue::Metric(metric),
            RawCell::Text(text) => CellValue::Text(text),
            RawCell::Flag(_) | RawCell::Null(()) => CellValue::Empty,
        }
    }
}

impl CellValue {
    /// Returns the numeric reading of this cell.
    ///
    /// Text such as `"42"` or `"37.5%"` reads as its number; any other text
    /// has no numeric reading.
    #[must_use]
    pub fn as_metric(&self) -> Option<Metric> {
        match self {
            CellValue::Metric(metric) => Some(*metric),
            CellValue::Text(text) => parse_numeric_text(text),
            CellValue::Empty => None,
        }
    }
}

impl From<Metric> for CellValue {
    fn from(value: Metric) -> Self {
        CellValue::Metric(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Metric(Metric::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Metric(Metric::Int(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Metric(Metric::Float(value))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

fn parse_numeric_text(text: &str) -> Option<Metric> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(Metric::Int(value));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Metric::Float)
}
