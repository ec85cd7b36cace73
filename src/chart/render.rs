use std::{io::Cursor, ops::Range};

use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;

use crate::indicators::Indicator;

use super::error::ChartError;

// 5x3 inches at 100 dpi.
pub const CHART_WIDTH_PX: u32 = 500;
pub const CHART_HEIGHT_PX: u32 = 300;

struct ChartStyle;

impl ChartStyle {
    const MARGIN: i32 = 12;
    const CAPTION_FONT_FAMILY: &'static str = "sans-serif";
    const CAPTION_FONT_SIZE: i32 = 20;
    const X_LABEL_AREA_SIZE: u32 = 30;
    const Y_LABEL_AREA_SIZE: u32 = 56;
    const Y_LABEL_COUNT: usize = 6;
    const Y_HEADROOM: f64 = 1.1;
    const BAR_GAP_PX: u32 = 18;
    const BACKGROUND: RGBColor = WHITE;

    fn bar_fill(indicator: Indicator) -> RGBColor {
        match indicator {
            Indicator::Energy => BLUE,
            Indicator::Water => GREEN,
            Indicator::Co2 => RED,
        }
    }
}

/// Value axis always includes zero; empty charts get a unit range.
pub(super) fn value_range(values: &[f64; 3]) -> Range<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    if max == 0.0 && min == 0.0 {
        return 0.0..1.0;
    }

    (min * ChartStyle::Y_HEADROOM)..(max * ChartStyle::Y_HEADROOM)
}

pub(super) fn render_chart_png(
    stage_name: &str,
    values: [f64; 3],
    (width, height): (u32, u32),
) -> Result<Vec<u8>, ChartError> {
    if let Some((indicator, value)) = Indicator::ALL
        .into_iter()
        .zip(values)
        .find(|(_, value)| !value.is_finite())
    {
        return Err(ChartError::InvalidValue {
            indicator: indicator.label(),
            value,
        });
    }

    if width == 0 || height == 0 {
        return Err(ChartError::InvalidSize { width, height });
    }

    let mut rgb_buffer = vec![255u8; width as usize * height as usize * 3];

    // The drawing area borrows the buffer; it is released at the end of this
    // block, on success and on every early return alike.
    {
        let drawing_area =
            BitMapBackend::with_buffer(&mut rgb_buffer, (width, height)).into_drawing_area();
        drawing_area
            .fill(&ChartStyle::BACKGROUND)
            .map_err(|error| ChartError::Backend(format!("background fill error: {:?}", error)))?;

        let mut chart = ChartBuilder::on(&drawing_area)
            .margin(ChartStyle::MARGIN)
            .caption(
                format!("Indicadores - {}", stage_name),
                (ChartStyle::CAPTION_FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
            )
            .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
            .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(
                (0u32..Indicator::ALL.len() as u32).into_segmented(),
                value_range(&values),
            )
            .map_err(|error| ChartError::Backend(format!("chart build error: {:?}", error)))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_labels(ChartStyle::Y_LABEL_COUNT)
            .y_desc("Valores")
            .x_label_formatter(&|segment: &SegmentValue<u32>| match segment {
                SegmentValue::CenterOf(index) => Indicator::ALL
                    .get(*index as usize)
                    .map(|indicator| indicator.label().to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(|error| ChartError::Backend(format!("mesh draw error: {:?}", error)))?;

        chart
            .draw_series(Indicator::ALL.into_iter().zip(values).enumerate().map(
                |(position, (indicator, value))| {
                    let position = position as u32;
                    let mut bar = Rectangle::new(
                        [
                            (SegmentValue::Exact(position), 0.0),
                            (SegmentValue::Exact(position + 1), value),
                        ],
                        ChartStyle::bar_fill(indicator).filled(),
                    );
                    bar.set_margin(0, 0, ChartStyle::BAR_GAP_PX, ChartStyle::BAR_GAP_PX);
                    bar
                },
            ))
            .map_err(|error| ChartError::Backend(format!("bar draw error: {:?}", error)))?;

        drawing_area
            .present()
            .map_err(|error| ChartError::Backend(format!("present error: {:?}", error)))?;
    }

    let rgb_image = RgbImage::from_raw(width, height, rgb_buffer)
        .ok_or_else(|| ChartError::PngEncoding("image buffer conversion failed".to_string()))?;
    let mut output = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(rgb_image)
        .write_to(&mut output, ImageFormat::Png)
        .map_err(|error| ChartError::PngEncoding(error.to_string()))?;

    Ok(output.into_inner())
}
