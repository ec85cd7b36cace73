use std::{cell::RefCell, io::Cursor};

use image::{DynamicImage, ImageFormat, RgbImage};

use super::{ChartError, ChartRenderer};

/// Font-free stand-in: a flat 50x30 PNG, recording which stages were drawn.
#[derive(Default)]
pub(crate) struct SolidRenderer {
    rendered: RefCell<Vec<String>>,
}

impl SolidRenderer {
    pub(crate) fn rendered(&self) -> Vec<String> {
        self.rendered.borrow().clone()
    }
}

impl ChartRenderer for SolidRenderer {
    fn render(&self, stage_name: &str, _values: [f64; 3]) -> Result<Vec<u8>, ChartError> {
        self.rendered.borrow_mut().push(stage_name.to_string());
        let image = RgbImage::from_pixel(50, 30, image::Rgb([0, 0, 255]));
        let mut output = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut output, ImageFormat::Png)
            .map_err(|error| ChartError::PngEncoding(error.to_string()))?;
        Ok(output.into_inner())
    }
}

pub(crate) struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    fn render(&self, _stage_name: &str, _values: [f64; 3]) -> Result<Vec<u8>, ChartError> {
        Err(ChartError::Backend("font unavailable".to_string()))
    }
}
