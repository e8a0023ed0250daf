use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SORT_COLUMN, LABEL_COLUMN, default_translation};
use crate::error::{ChartError, ChartResult};
use crate::transform::{DEFAULT_SUMMARY_LABEL, DEFAULT_TOTAL_LABEL};

/// Goal metrics added to the series picker by `enable_show_goals`.
pub const GOAL_METRICS: [(&str, &str); 2] = [
    ("nb_conversions", "Conversions"),
    ("revenue", "Total Revenue"),
];

pub const ROW_EVOLUTION_SERIES_TOGGLE: &str = "RowEvolutionSeriesToggle";

/// Client-side control that toggles series outside of the chart itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSeriesToggle {
    pub name: String,
    pub initially_show_all_metrics: bool,
}

/// Display options of one graph.
///
/// The value is assembled once by the caller and read-only while a chart is
/// generated. It is serializable so dashboards can persist per-widget setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewProperties {
    #[serde(default = "default_columns_to_display")]
    pub columns_to_display: Vec<String>,
    #[serde(default)]
    pub selectable_columns: Vec<String>,
    #[serde(default)]
    pub column_translations: IndexMap<String, String>,
    #[serde(default)]
    pub y_axis_unit: Option<String>,
    #[serde(default)]
    pub graph_limit: Option<usize>,
    #[serde(default)]
    pub add_total_row: bool,
    #[serde(default)]
    pub show_all_ticks: bool,
    #[serde(default = "default_true")]
    pub display_percentage_in_tooltip: bool,
    #[serde(default = "default_true")]
    pub show_export_as_image_icon: bool,
    #[serde(default)]
    pub external_series_toggle: Option<ExternalSeriesToggle>,
    #[serde(default = "default_summary_row_label")]
    pub summary_row_label: String,
    #[serde(default = "default_total_row_label")]
    pub total_row_label: String,
}

impl Default for ViewProperties {
    fn default() -> Self {
        Self {
            columns_to_display: default_columns_to_display(),
            selectable_columns: Vec::new(),
            column_translations: IndexMap::new(),
            y_axis_unit: None,
            graph_limit: None,
            add_total_row: false,
            show_all_ticks: false,
            display_percentage_in_tooltip: true,
            show_export_as_image_icon: true,
            external_series_toggle: None,
            summary_row_label: default_summary_row_label(),
            total_row_label: default_total_row_label(),
        }
    }
}

impl ViewProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns_to_display<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns_to_display = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds columns the viewer can toggle, ahead of the ones already present.
    ///
    /// Goal metrics enabled earlier stay at the end of the list.
    #[must_use]
    pub fn with_selectable_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selectable: Vec<String> = columns.into_iter().map(Into::into).collect();
        selectable.append(&mut self.selectable_columns);
        self.selectable_columns = selectable;
        self
    }

    #[must_use]
    pub fn with_column_translation(
        mut self,
        column: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.column_translations
            .insert(column.into(), translation.into());
        self
    }

    /// Forces one unit on every plotted series.
    #[must_use]
    pub fn with_axis_y_unit(mut self, unit: impl Into<String>) -> Self {
        self.y_axis_unit = Some(unit.into());
        self
    }

    /// Caps the number of plotted rows; excess rows fold into one summary row.
    #[must_use]
    pub fn with_graph_limit(mut self, limit: usize) -> Self {
        self.graph_limit = Some(limit);
        self
    }

    /// Hides tooltip percentages for metrics whose column sum is not a
    /// meaningful whole (one visit counted under several rows).
    #[must_use]
    pub fn disallow_percentage_in_graph_tooltip(mut self) -> Self {
        self.display_percentage_in_tooltip = false;
        self
    }

    /// Appends goal metrics to the series picker with their display names.
    #[must_use]
    pub fn enable_show_goals(mut self) -> Self {
        for (column, translation) in GOAL_METRICS {
            self.selectable_columns.push(column.to_owned());
            self.column_translations
                .insert(column.to_owned(), translation.to_owned());
        }
        self
    }

    #[must_use]
    pub fn with_row_evolution_series_toggle(mut self, initially_show_all_metrics: bool) -> Self {
        self.external_series_toggle = Some(ExternalSeriesToggle {
            name: ROW_EVOLUTION_SERIES_TOGGLE.to_owned(),
            initially_show_all_metrics,
        });
        self
    }

    /// Shows every x-axis tick instead of every other one.
    #[must_use]
    pub fn show_all_ticks(mut self) -> Self {
        self.show_all_ticks = true;
        self
    }

    /// Adds a leading row holding the totals of every metric.
    #[must_use]
    pub fn add_total_row(mut self) -> Self {
        self.add_total_row = true;
        self
    }

    #[must_use]
    pub fn with_summary_row_label(mut self, label: impl Into<String>) -> Self {
        self.summary_row_label = label.into();
        self
    }

    #[must_use]
    pub fn with_total_row_label(mut self, label: impl Into<String>) -> Self {
        self.total_row_label = label.into();
        self
    }

    #[must_use]
    pub fn without_export_as_image_icon(mut self) -> Self {
        self.show_export_as_image_icon = false;
        self
    }

    /// Display name of a column: explicit translation, then the built-in name
    /// of well-known metrics, then the raw column name.
    #[must_use]
    pub fn column_translation(&self, column: &str) -> String {
        self.column_translations
            .get(column)
            .cloned()
            .or_else(|| default_translation(column).map(str::to_owned))
            .unwrap_or_else(|| column.to_owned())
    }

    /// Displayed columns without the label column.
    #[must_use]
    pub fn metric_columns(&self) -> Vec<&str> {
        self.columns_to_display
            .iter()
            .map(String::as_str)
            .filter(|column| *column != LABEL_COLUMN)
            .collect()
    }

    #[must_use]
    pub fn is_displayed(&self, column: &str) -> bool {
        self.columns_to_display.iter().any(|c| c == column)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize view properties: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse view properties json: {e}"))
        })
    }
}

/// Per-request inputs that are not part of the persisted view setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRequest {
    #[serde(default)]
    pub site_id: Option<u32>,
    #[serde(default = "default_true")]
    pub show_series_picker: bool,
}

impl Default for GraphRequest {
    fn default() -> Self {
        Self {
            site_id: None,
            show_series_picker: true,
        }
    }
}

impl GraphRequest {
    #[must_use]
    pub fn for_site(site_id: u32) -> Self {
        Self {
            site_id: Some(site_id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn without_series_picker(mut self) -> Self {
        self.show_series_picker = false;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize graph request: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse graph request json: {e}"))
        })
    }
}

fn default_columns_to_display() -> Vec<String> {
    vec![LABEL_COLUMN.to_owned(), DEFAULT_SORT_COLUMN.to_owned()]
}

fn default_true() -> bool {
    true
}

fn default_summary_row_label() -> String {
    DEFAULT_SUMMARY_LABEL.to_owned()
}

fn default_total_row_label() -> String {
    DEFAULT_TOTAL_LABEL.to_owned()
}
