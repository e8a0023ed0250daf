use tracing::debug;

use crate::core::{DataTable, SiteCurrencies};
use crate::error::ChartResult;
use crate::transform::{decode_labels, prepend_totals_row, summarize_beyond_limit};

use super::{
    ChartKind, ChartPayload, GraphRequest, SeriesData, ViewProperties, build_series_picker,
    units_for_columns_to_display,
};

/// Turns a report table into the payload of one chart kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataGenerator {
    kind: ChartKind,
    properties: ViewProperties,
    currencies: SiteCurrencies,
}

impl ChartDataGenerator {
    #[must_use]
    pub fn new(kind: ChartKind, properties: ViewProperties) -> Self {
        Self {
            kind,
            properties,
            currencies: SiteCurrencies::default(),
        }
    }

    /// Builds a generator from a chart type name (`evolution`, `pie`, `bar`).
    pub fn factory(kind: &str, properties: ViewProperties) -> ChartResult<Self> {
        let kind = kind.parse::<ChartKind>()?;
        Ok(Self::new(kind, properties))
    }

    #[must_use]
    pub fn with_site_currencies(mut self, currencies: SiteCurrencies) -> Self {
        self.currencies = currencies;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn properties(&self) -> &ViewProperties {
        &self.properties
    }

    /// Runs summarization, totals, label decoding, unit resolution and the
    /// series picker in that order, then assembles the payload.
    ///
    /// An empty table yields a payload with no series, units or picker.
    #[must_use]
    pub fn generate(&self, mut table: DataTable, request: &GraphRequest) -> ChartPayload {
        let properties = &self.properties;
        if let Some(limit) = properties.graph_limit {
            summarize_beyond_limit(&mut table, limit, None, &properties.summary_row_label);
        }

        let mut payload = ChartPayload {
            y_axis_unit: properties.y_axis_unit.clone(),
            display_percentage_in_tooltip: properties.display_percentage_in_tooltip,
            show_all_ticks: properties.show_all_ticks,
            ..ChartPayload::default()
        };

        if table.is_empty() {
            debug!(kind = %self.kind, "no rows to chart");
            return payload;
        }

        if properties.add_total_row {
            prepend_totals_row(&mut table, &properties.total_row_label);
        }
        decode_labels(&mut table);

        let units = units_for_columns_to_display(self.kind, properties, request, &self.currencies);

        payload.x_axis_labels = table.labels();
        payload.series = self
            .plotted_columns()
            .into_iter()
            .map(|column| SeriesData {
                column: column.to_owned(),
                label: properties.column_translation(column),
                unit: units.get(column).cloned().flatten(),
                values: table.metric_column(column),
            })
            .collect();
        payload.series_picker =
            build_series_picker(properties, request, self.kind.multi_select_picker());

        debug!(
            kind = %self.kind,
            rows = table.row_count(),
            series = payload.series.len(),
            picker = payload.series_picker.is_some(),
            "generated chart payload"
        );
        payload
    }

    /// Same as `generate`, serialized to single-line JSON.
    pub fn generate_json(&self, table: DataTable, request: &GraphRequest) -> ChartResult<String> {
        self.generate(table, request).to_json()
    }

    fn plotted_columns(&self) -> Vec<&str> {
        let mut columns = self.properties.metric_columns();
        if self.kind.plots_single_metric() {
            columns.truncate(1);
        }
        columns
    }
}
