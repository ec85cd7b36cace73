mod error;
mod render;

#[cfg(test)]
pub(crate) mod fixture;

pub use error::ChartError;
pub use render::{CHART_HEIGHT_PX, CHART_WIDTH_PX};

use crate::config::ChartConfig;

/// Turns one stage's three indicator values into an encoded image.
pub trait ChartRenderer {
    fn render(&self, stage_name: &str, values: [f64; 3]) -> Result<Vec<u8>, ChartError>;
}

/// PNG bar charts drawn with plotters on an in-memory bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlottersRenderer {
    width_px: u32,
    height_px: u32,
}

impl PlottersRenderer {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.width_px, config.height_px)
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, stage_name: &str, values: [f64; 3]) -> Result<Vec<u8>, ChartError> {
        render::render_chart_png(stage_name, values, (self.width_px, self.height_px))
    }
}
