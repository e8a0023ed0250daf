//! report-charts: chart data generation for web analytics reports.
//!
//! A report `DataTable` goes through summarization, an optional totals row,
//! label decoding, unit resolution and series picker construction before it
//! is serialized into the JSON payload the client chart renderer consumes.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;
pub mod transform;

pub use api::{ChartDataGenerator, ChartKind, ChartPayload, GraphRequest, ViewProperties};
pub use error::{ChartError, ChartResult};
