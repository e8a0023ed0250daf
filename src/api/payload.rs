use serde::{Deserialize, Serialize};

use crate::core::Metric;
use crate::error::{ChartError, ChartResult};

use super::SeriesPicker;

/// One plotted metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub column: String,
    pub label: String,
    pub unit: Option<String>,
    pub values: Vec<Metric>,
}

/// Data handed to the client chart renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub x_axis_labels: Vec<String>,
    pub series: Vec<SeriesData>,
    #[serde(default)]
    pub y_axis_unit: Option<String>,
    #[serde(default)]
    pub display_percentage_in_tooltip: bool,
    #[serde(default)]
    pub show_all_ticks: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_picker: Option<SeriesPicker>,
}

impl ChartPayload {
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    #[must_use]
    pub fn series(&self, column: &str) -> Option<&SeriesData> {
        self.series.iter().find(|series| series.column == column)
    }

    /// Serializes the payload for embedding inside a script block.
    ///
    /// The output never contains carriage returns or newlines.
    pub fn to_json(&self) -> ChartResult<String> {
        let json = serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart payload: {e}"))
        })?;
        Ok(strip_line_breaks(&json))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart payload json: {e}"))
        })
    }
}

fn strip_line_breaks(json: &str) -> String {
    json.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}
