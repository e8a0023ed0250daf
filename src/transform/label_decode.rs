use std::borrow::Cow;

use tracing::warn;

use crate::core::DataTable;

/// URL-decodes a row label the way form-encoded query values are decoded:
/// `+` becomes a space and percent escapes are resolved.
///
/// Labels whose escapes do not decode to UTF-8 are returned unchanged.
#[must_use]
pub fn decode_label(label: &str) -> Cow<'_, str> {
    if !label.contains(['%', '+']) {
        return Cow::Borrowed(label);
    }

    let spaced = label.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(err) => {
            warn!(label, error = %err, "label is not valid url-encoded utf-8");
            Cow::Borrowed(label)
        }
    }
}

pub fn decode_labels(table: &mut DataTable) {
    table.map_labels(|label| decode_label(label).into_owned());
}
