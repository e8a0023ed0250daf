use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::{CellValue, Metric};
use crate::error::{ChartError, ChartResult};

/// Name of the column that identifies each row category.
pub const LABEL_COLUMN: &str = "label";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    #[default]
    Data,
    /// Aggregate of the rows truncated by a graph limit.
    Summary,
    /// Aggregate of every row of the table.
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    #[serde(default)]
    pub columns: IndexMap<String, CellValue>,
    #[serde(default)]
    pub kind: RowKind,
}

impl Row {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            columns: IndexMap::new(),
            kind: RowKind::Data,
        }
    }

    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: RowKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn metric(&self, name: &str) -> Option<Metric> {
        self.columns.get(name).and_then(CellValue::as_metric)
    }
}

/// Ordered report result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    #[serde(default)]
    rows: Vec<Row>,
    #[serde(default)]
    sorted_by: Option<String>,
}

impl DataTable {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            sorted_by: None,
        }
    }

    #[must_use]
    pub fn with_sorted_by(mut self, column: impl Into<String>) -> Self {
        self.sorted_by = Some(column.into());
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse data table json: {e}")))
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column the rows are currently sorted by, if any.
    #[must_use]
    pub fn sorted_by(&self) -> Option<&str> {
        self.sorted_by.as_deref()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.label.clone()).collect()
    }

    /// Numeric values of one column, missing or non-numeric cells read as 0.
    #[must_use]
    pub fn metric_column(&self, name: &str) -> Vec<Metric> {
        self.rows
            .iter()
            .map(|row| row.metric(name).unwrap_or(Metric::ZERO))
            .collect()
    }

    /// Stable descending sort on a numeric column. Rows lacking it sort as 0.
    pub fn sort_desc_by(&mut self, column: &str) {
        self.rows.sort_by_key(|row| {
            std::cmp::Reverse(OrderedFloat(
                row.metric(column).unwrap_or(Metric::ZERO).as_f64(),
            ))
        });
        self.sorted_by = Some(column.to_owned());
    }

    pub fn map_labels<F>(&mut self, mut func: F)
    where
        F: FnMut(&str) -> String,
    {
        for row in &mut self.rows {
            row.label = func(&row.label);
        }
    }
}

impl FromIterator<Row> for DataTable {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Sums every numeric column across `rows`, keeping first-seen column order.
///
/// Text columns that do not read as numbers are skipped.
#[must_use]
pub fn sum_columns<'a, I>(rows: I) -> IndexMap<String, CellValue>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut sums: IndexMap<String, Metric> = IndexMap::new();
    for row in rows {
        for (name, value) in &row.columns {
            if let Some(metric) = value.as_metric() {
                let entry = sums.entry(name.clone()).or_default();
                *entry = *entry + metric;
            }
        }
    }
    sums.into_iter()
        .map(|(name, metric)| (name, CellValue::Metric(metric)))
        .collect()
}
