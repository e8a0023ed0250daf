use serde::{Deserialize, Serialize};

use super::{GraphRequest, ViewProperties};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableColumn {
    pub column: String,
    pub translation: String,
    pub displayed: bool,
}

/// Configuration of the client-side metric picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPicker {
    pub selectable_columns: Vec<SelectableColumn>,
    pub multi_select: bool,
}

/// Builds the picker from the selectable and displayed columns.
///
/// Returns `None` when nothing is selectable or the request turned the picker off.
#[must_use]
pub fn build_series_picker(
    properties: &ViewProperties,
    request: &GraphRequest,
    multi_select: bool,
) -> Option<SeriesPicker> {
    if properties.selectable_columns.is_empty() || !request.show_series_picker {
        return None;
    }

    let selectable_columns = properties
        .selectable_columns
        .iter()
        .map(|column| SelectableColumn {
            column: column.clone(),
            translation: properties.column_translation(column),
            displayed: properties.is_displayed(column),
        })
        .collect();

    Some(SeriesPicker {
        selectable_columns,
        multi_select,
    })
}
