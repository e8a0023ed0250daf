use tracing::trace;

use crate::core::{DataTable, Row, RowKind, sum_columns};

pub const DEFAULT_TOTAL_LABEL: &str = "Total";

/// Inserts a row at position 0 holding the sum of every numeric column.
///
/// The relative order of the existing rows is unchanged. Tables with fewer
/// than two rows are left untouched.
pub fn prepend_totals_row(table: &mut DataTable, total_label: &str) {
    if table.row_count() <= 1 {
        return;
    }

    let total = Row {
        label: total_label.to_owned(),
        columns: sum_columns(table.rows()),
        kind: RowKind::Total,
    };
    trace!(columns = total.columns.len(), "prepend totals row");
    table.rows_mut().insert(0, total);
}
