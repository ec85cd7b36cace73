use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{indicator} value is not finite: {value}")]
    InvalidValue { indicator: &'static str, value: f64 },
    #[error("chart size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("render backend failure: {0}")]
    Backend(String),
    #[error("png encoding failure: {0}")]
    PngEncoding(String),
}

impl ChartError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "CHART_INVALID_VALUE",
            Self::InvalidSize { .. } => "CHART_INVALID_SIZE",
            Self::Backend(_) => "CHART_BACKEND_ERROR",
            Self::PngEncoding(_) => "CHART_PNG_ENCODING_ERROR",
        }
    }
}
