use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Chart '{0}' has no finite values to plot")]
    EmptyChart(String),

    #[error("Series '{series}' has {actual} values but the chart has {expected} x positions")]
    LengthMismatch { series: String, expected: usize, actual: usize },

    #[error("Chart size must be positive, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Plotting backend error: {0}")]
    Render(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}
