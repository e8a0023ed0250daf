use indexmap::IndexMap;
use tracing::trace;

use crate::core::{LABEL_COLUMN, SiteCurrencies, metric_unit};

use super::{ChartKind, GraphRequest, ViewProperties};

/// Units of the plotted series keyed by column, in display order.
///
/// `None` marks a plain count.
pub type ColumnUnits = IndexMap<String, Option<String>>;

/// Derives one unit per displayed column from its name and the site.
#[must_use]
pub fn derive_units<'a, I>(columns: I, site_id: Option<u32>, currencies: &SiteCurrencies) -> ColumnUnits
where
    I: IntoIterator<Item = &'a str>,
{
    columns
        .into_iter()
        .map(|column| (column.to_owned(), metric_unit(column, site_id, currencies)))
        .collect()
}

/// Resolves the y-axis units of every displayed series.
///
/// A forced `y_axis_unit` replaces every derived unit. Bar charts drop the
/// first entry, which belongs to the label axis; other kinds drop the label
/// column by name.
#[must_use]
pub fn units_for_columns_to_display(
    kind: ChartKind,
    properties: &ViewProperties,
    request: &GraphRequest,
    currencies: &SiteCurrencies,
) -> ColumnUnits {
    let mut units = derive_units(
        properties.columns_to_display.iter().map(String::as_str),
        request.site_id,
        currencies,
    );

    if let Some(forced) = properties.y_axis_unit.as_deref().filter(|u| !u.is_empty()) {
        for unit in units.values_mut() {
            *unit = Some(forced.to_owned());
        }
    }

    match kind {
        ChartKind::VerticalBar => {
            units.shift_remove_index(0);
        }
        ChartKind::Evolution | ChartKind::Pie => {
            units.shift_remove(LABEL_COLUMN);
        }
    }

    trace!(kind = %kind, count = units.len(), "resolved series units");
    units
}
