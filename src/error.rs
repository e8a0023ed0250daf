use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unsupported chart type '{0}'")]
    UnsupportedChartType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
