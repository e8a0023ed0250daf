//! Chart payload generation.
//!
//! `ChartDataGenerator` is the entry point: it owns the view setup of one
//! graph and turns a `DataTable` into a `ChartPayload` for a given request.

mod chart_kind;
mod generator;
mod graph_view;
mod payload;
mod series_picker;
mod units;
mod view_properties;

pub use chart_kind::ChartKind;
pub use generator::ChartDataGenerator;
pub use graph_view::{DEFAULT_GRAPH_HEIGHT, DEFAULT_GRAPH_WIDTH, GraphView};
pub use payload::{ChartPayload, SeriesData};
pub use series_picker::{SelectableColumn, SeriesPicker, build_series_picker};
pub use units::{ColumnUnits, derive_units, units_for_columns_to_display};
pub use view_properties::{
    ExternalSeriesToggle, GOAL_METRICS, GraphRequest, ROW_EVOLUTION_SERIES_TOGGLE, ViewProperties,
};
