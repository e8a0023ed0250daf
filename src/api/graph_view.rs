use serde::{Deserialize, Serialize};

use crate::core::DataTable;
use crate::error::ChartResult;

use super::{ChartDataGenerator, ChartKind, GraphRequest, ViewProperties};

pub const DEFAULT_GRAPH_WIDTH: &str = "100%";
pub const DEFAULT_GRAPH_HEIGHT: u32 = 250;

/// Everything the page needs to embed one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    pub width: String,
    pub height: u32,
    pub graph_type: ChartKind,
    /// Single-line JSON chart payload.
    pub data: String,
    pub is_data_available: bool,
    pub properties: ViewProperties,
}

impl GraphView {
    pub fn build(
        generator: &ChartDataGenerator,
        table: DataTable,
        request: &GraphRequest,
    ) -> ChartResult<Self> {
        let payload = generator.generate(table, request);
        Ok(Self {
            width: DEFAULT_GRAPH_WIDTH.to_owned(),
            height: DEFAULT_GRAPH_HEIGHT,
            graph_type: generator.kind(),
            data: payload.to_json()?,
            is_data_available: payload.has_data(),
            properties: generator.properties().clone(),
        })
    }

    #[must_use]
    pub fn with_size(mut self, width: impl Into<String>, height: u32) -> Self {
        self.width = width.into();
        self.height = height;
        self
    }
}
