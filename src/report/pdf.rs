use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, Stream,
};

use super::{
    error::ReportError,
    layout::{Align, LayoutItem, PageLayout, ReportLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM},
};

const PT_PER_MM: f64 = 72.0 / 25.4;
const FONT_RESOURCE: &str = "F1";
// Horizontal text padding inside a cell.
const CELL_PADDING_MM: f64 = 1.0;
// Baseline offset below the cell's vertical centre, as a fraction of the font size.
const BASELINE_FACTOR: f64 = 0.3;

/// Helvetica advance widths (1/1000 em) for ASCII 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];
const FALLBACK_WIDTH: u16 = 556;

fn to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

fn rounded(pt: f64) -> Object {
    Object::Integer(pt.round() as i64)
}

/// Bytes for a base-14 font with WinAnsiEncoding. Characters outside the
/// code page become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => ch as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn char_width(byte: u8) -> u16 {
    match byte {
        0x20..=0x7e => HELVETICA_WIDTHS[usize::from(byte - 0x20)],
        _ => FALLBACK_WIDTH,
    }
}

fn text_width_pt(encoded: &[u8], font_pt: u8) -> f64 {
    let units: u32 = encoded.iter().map(|byte| u32::from(char_width(*byte))).sum();
    f64::from(units) * f64::from(font_pt) / 1000.0
}

struct PageWriter {
    operations: Vec<Operation>,
    images: Dictionary,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            operations: Vec::new(),
            images: Dictionary::new(),
        }
    }

    // PDF user space grows upwards from the bottom-left corner.
    fn y_from_top(top_mm: f64) -> f64 {
        to_pt(PAGE_HEIGHT_MM - top_mm)
    }

    #[allow(clippy::too_many_arguments)]
    fn cell(
        &mut self,
        x_mm: f64,
        y_mm: f64,
        width_mm: f64,
        height_mm: f64,
        text: &str,
        font_pt: u8,
        align: Align,
        bordered: bool,
    ) {
        if bordered {
            self.operations.push(Operation::new(
                "re",
                vec![
                    rounded(to_pt(x_mm)),
                    rounded(Self::y_from_top(y_mm + height_mm)),
                    rounded(to_pt(width_mm)),
                    rounded(to_pt(height_mm)),
                ],
            ));
            self.operations.push(Operation::new("S", vec![]));
        }

        let encoded = encode_win_ansi(text);
        let text_x = match align {
            Align::Left => to_pt(x_mm + CELL_PADDING_MM),
            Align::Center => {
                to_pt(x_mm) + (to_pt(width_mm) - text_width_pt(&encoded, font_pt)) / 2.0
            }
        };
        let baseline =
            Self::y_from_top(y_mm + height_mm / 2.0) - BASELINE_FACTOR * f64::from(font_pt);

        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![FONT_RESOURCE.into(), i64::from(font_pt).into()],
            ),
            Operation::new("Td", vec![rounded(text_x), rounded(baseline)]),
            Operation::new("Tj", vec![Object::string_literal(encoded)]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn image(
        &mut self,
        document: &mut Document,
        x_mm: f64,
        y_mm: f64,
        width_mm: f64,
        label: &str,
        png: &[u8],
    ) -> Result<(), ReportError> {
        let pixels = image::load_from_memory(png)
            .map_err(|source| ReportError::Image {
                stage: label.to_string(),
                source,
            })?
            .to_rgb8();
        let (width_px, height_px) = pixels.dimensions();

        let image_id = document.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width_px),
                "Height" => i64::from(height_px),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            pixels.into_raw(),
        ));
        let name = format!("Im{}", self.images.len() + 1);
        self.images.set(name.clone(), image_id);

        let width_pt = to_pt(width_mm);
        let height_pt = width_pt * f64::from(height_px) / f64::from(width_px.max(1));
        let bottom = Self::y_from_top(y_mm) - height_pt;

        self.operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    rounded(width_pt),
                    0.into(),
                    0.into(),
                    rounded(height_pt),
                    rounded(to_pt(x_mm)),
                    rounded(bottom),
                ],
            ),
            Operation::new("Do", vec![Object::Name(name.into_bytes())]),
            Operation::new("Q", vec![]),
        ]);
        Ok(())
    }

    fn write_items(
        &mut self,
        document: &mut Document,
        page: &PageLayout,
    ) -> Result<(), ReportError> {
        for item in &page.items {
            match item {
                LayoutItem::Cell {
                    x_mm,
                    y_mm,
                    width_mm,
                    height_mm,
                    text,
                    font_pt,
                    align,
                    bordered,
                } => self.cell(
                    *x_mm, *y_mm, *width_mm, *height_mm, text, *font_pt, *align, *bordered,
                ),
                LayoutItem::Image {
                    x_mm,
                    y_mm,
                    width_mm,
                    label,
                    png,
                } => self.image(document, *x_mm, *y_mm, *width_mm, label, png)?,
            }
        }
        Ok(())
    }
}

/// Serializes the layout into a complete PDF document held in memory.
pub(super) fn write_pdf(layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();
    let font_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let mut writer = PageWriter::new();
        writer.write_items(&mut document, page)?;

        let content = Content {
            operations: writer.operations,
        }
        .encode()
        .map_err(|error| ReportError::Content(error.to_string()))?;
        let content_id = document.add_object(Stream::new(dictionary! {}, content));
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { FONT_RESOURCE => font_id },
                "XObject" => writer.images,
            },
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                rounded(to_pt(PAGE_WIDTH_MM)),
                rounded(to_pt(PAGE_HEIGHT_MM)),
            ],
        }),
    );
    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);
    document.compress();

    let mut buffer = Vec::new();
    document
        .save_to(&mut buffer)
        .map_err(|error| ReportError::Serialize(error.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::{encode_win_ansi, text_width_pt};

    #[test]
    fn latin_accents_map_to_single_bytes() {
        assert_eq!(encode_win_ansi("Água"), vec![0xc1, b'g', b'u', b'a']);
        assert_eq!(encode_win_ansi("Relatório")[6], 0xf3);
    }

    #[test]
    fn unsupported_characters_are_replaced() {
        assert_eq!(encode_win_ansi("CO₂"), b"CO?".to_vec());
    }

    #[test]
    fn width_uses_helvetica_metrics() {
        // 'i' is narrow, 'm' is wide.
        assert!(text_width_pt(b"iii", 10) < text_width_pt(b"mmm", 10));
        assert!((text_width_pt(b"0", 10) - 5.56).abs() < 1e-9);
    }
}
