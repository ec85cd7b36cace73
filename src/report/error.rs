use thiserror::Error;

use crate::chart::ChartError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("chart for {stage} failed: {source}")]
    Chart { stage: String, source: ChartError },
    #[error("chart image for {stage} could not be decoded: {source}")]
    Image {
        stage: String,
        source: image::ImageError,
    },
    #[error("pdf content encoding failed: {0}")]
    Content(String),
    #[error("pdf serialization failed: {0}")]
    Serialize(String),
}

impl ReportError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chart { .. } => "REPORT_CHART_ERROR",
            Self::Image { .. } => "REPORT_IMAGE_ERROR",
            Self::Content(_) => "REPORT_CONTENT_ERROR",
            Self::Serialize(_) => "REPORT_SERIALIZE_ERROR",
        }
    }
}
