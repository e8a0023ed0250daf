use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Chart variants the client renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "evolution")]
    Evolution,
    #[serde(rename = "pie")]
    Pie,
    #[serde(rename = "bar")]
    VerticalBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Evolution, ChartKind::Pie, ChartKind::VerticalBar];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Evolution => "evolution",
            ChartKind::Pie => "pie",
            ChartKind::VerticalBar => "bar",
        }
    }

    /// Whether the series picker lets the viewer plot several metrics at once.
    #[must_use]
    pub fn multi_select_picker(self) -> bool {
        !matches!(self, ChartKind::Pie)
    }

    /// Whether only the first metric column is plotted.
    #[must_use]
    pub fn plots_single_metric(self) -> bool {
        matches!(self, ChartKind::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChartError::UnsupportedChartType(s.to_owned()))
    }
}
