pub mod metrics;
pub mod table;
pub mod types;

pub use metrics::{
    DEFAULT_SORT_COLUMN, SiteCurrencies, currency_symbol, default_translation, metric_unit,
};
pub use table::{DataTable, LABEL_COLUMN, Row, RowKind, sum_columns};
pub use types::{CellValue, Metric};
