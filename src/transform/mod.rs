//! In-place row transformations applied to a report before charting.

mod label_decode;
mod summary_row;
mod totals_row;

pub use label_decode::{decode_label, decode_labels};
pub use summary_row::{DEFAULT_SUMMARY_LABEL, summarize_beyond_limit};
pub use totals_row::{DEFAULT_TOTAL_LABEL, prepend_totals_row};
