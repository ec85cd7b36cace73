use crate::chart::{CHART_HEIGHT_PX, CHART_WIDTH_PX};

use super::schema::ChartConfig;

pub(super) fn default_database_path() -> String {
    "calcpc.db".to_string()
}

pub(super) fn default_report_concurrency() -> usize {
    2
}

pub(super) fn default_chart_width_px() -> u32 {
    CHART_WIDTH_PX
}

pub(super) fn default_chart_height_px() -> u32 {
    CHART_HEIGHT_PX
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width_px: default_chart_width_px(),
            height_px: default_chart_height_px(),
        }
    }
}
