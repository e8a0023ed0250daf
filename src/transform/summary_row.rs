use tracing::{debug, trace};

use crate::core::{DEFAULT_SORT_COLUMN, DataTable, Row, RowKind, sum_columns};

pub const DEFAULT_SUMMARY_LABEL: &str = "Others";

/// Collapses every row past position `limit - 1` into one summary row.
///
/// Rows are first sorted descending by `sort_column`, falling back to the
/// table's current sort column and then to `nb_visits`. The table keeps at
/// most `limit` rows, the last one being the aggregate of the truncated rows.
/// A `limit` of 0, an empty table or a table of at most `limit` rows is left
/// untouched.
pub fn summarize_beyond_limit(
    table: &mut DataTable,
    limit: usize,
    sort_column: Option<&str>,
    summary_label: &str,
) {
    if limit == 0 || table.row_count() <= limit {
        trace!(
            limit,
            row_count = table.row_count(),
            "summary row not needed"
        );
        return;
    }

    let sort_column = sort_column
        .or(table.sorted_by())
        .unwrap_or(DEFAULT_SORT_COLUMN)
        .to_owned();
    table.sort_desc_by(&sort_column);

    let keep = limit - 1;
    let truncated: Vec<Row> = table.rows_mut().split_off(keep);
    let summary = Row {
        label: summary_label.to_owned(),
        columns: sum_columns(&truncated),
        kind: RowKind::Summary,
    };
    table.push_row(summary);

    debug!(
        limit,
        sort_column = %sort_column,
        truncated = truncated.len(),
        "summarized rows beyond graph limit"
    );
}
