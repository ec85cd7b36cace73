use crate::{
    chart::ChartRenderer,
    indicators::{Indicator, StageAggregate},
};

use super::{error::ReportError, Report};

// A4 portrait, millimetres, origin at the top-left corner.
pub(super) const PAGE_WIDTH_MM: f64 = 210.0;
pub(super) const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
const LINE_HEIGHT_MM: f64 = 10.0;
const LINE_WIDTH_MM: f64 = 200.0;
const TABLE_CELL_WIDTH_MM: f64 = 60.0;
const CHART_WIDTH_MM: f64 = 100.0;
const BODY_FONT_PT: u8 = 12;
const TABLE_FONT_PT: u8 = 10;

pub(super) const REPORT_TITLE: &str = "Relatório de Indicadores - Pegada de Carbono";
pub(super) const TABLE_HEADER: [&str; 2] = ["Indicador", "Valor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    /// A text line inside a cell box; `bordered` draws the box outline.
    Cell {
        x_mm: f64,
        y_mm: f64,
        width_mm: f64,
        height_mm: f64,
        text: String,
        font_pt: u8,
        align: Align,
        bordered: bool,
    },
    /// PNG placed at a fixed width; height follows the image aspect ratio.
    Image {
        x_mm: f64,
        y_mm: f64,
        width_mm: f64,
        label: String,
        png: Vec<u8>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub items: Vec<LayoutItem>,
}

#[cfg(test)]
impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            LayoutItem::Cell { text, .. } => Some(text.as_str()),
            LayoutItem::Image { .. } => None,
        })
    }

    pub fn image_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, LayoutItem::Image { .. }))
            .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<PageLayout>,
}

/// Flow cursor: items are appended top to bottom from the left margin.
struct PageFlow {
    page: PageLayout,
    y_mm: f64,
}

impl PageFlow {
    fn new() -> Self {
        Self {
            page: PageLayout::default(),
            y_mm: MARGIN_MM,
        }
    }

    fn line(&mut self, text: impl Into<String>, font_pt: u8, align: Align) {
        self.page.items.push(LayoutItem::Cell {
            x_mm: MARGIN_MM,
            y_mm: self.y_mm,
            width_mm: LINE_WIDTH_MM,
            height_mm: LINE_HEIGHT_MM,
            text: text.into(),
            font_pt,
            align,
            bordered: false,
        });
        self.y_mm += LINE_HEIGHT_MM;
    }

    fn table_row(&mut self, cells: [&str; 2]) {
        for (column, text) in cells.into_iter().enumerate() {
            self.page.items.push(LayoutItem::Cell {
                x_mm: MARGIN_MM + TABLE_CELL_WIDTH_MM * column as f64,
                y_mm: self.y_mm,
                width_mm: TABLE_CELL_WIDTH_MM,
                height_mm: LINE_HEIGHT_MM,
                text: text.to_string(),
                font_pt: TABLE_FONT_PT,
                align: Align::Left,
                bordered: true,
            });
        }
        self.y_mm += LINE_HEIGHT_MM;
    }

    fn image(&mut self, label: &str, png: Vec<u8>) {
        self.page.items.push(LayoutItem::Image {
            x_mm: MARGIN_MM,
            y_mm: self.y_mm,
            width_mm: CHART_WIDTH_MM,
            label: label.to_string(),
            png,
        });
    }

    fn finish(self) -> PageLayout {
        self.page
    }
}

/// Integral values print without a fraction (`10`), others in their
/// shortest round-trip form (`10.5`).
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    value.to_string()
}

fn cover_page(report: &Report) -> PageLayout {
    let mut flow = PageFlow::new();
    flow.line(REPORT_TITLE, BODY_FONT_PT, Align::Center);
    flow.line(
        format!("Usuário: {}", report.identity.user_name),
        BODY_FONT_PT,
        Align::Left,
    );
    flow.line(
        format!("Empresa: {}", report.identity.company_name),
        BODY_FONT_PT,
        Align::Left,
    );
    flow.line(
        format!("Data: {}", report.generated_on.format("%d/%m/%Y")),
        BODY_FONT_PT,
        Align::Left,
    );
    flow.finish()
}

fn stage_page(stage: &StageAggregate, chart_png: Vec<u8>) -> PageLayout {
    let mut flow = PageFlow::new();
    flow.line(stage.stage_name.as_str(), BODY_FONT_PT, Align::Left);
    flow.table_row(TABLE_HEADER);
    for indicator in Indicator::ALL {
        let value = format_value(stage.value(indicator));
        flow.table_row([indicator.label(), value.as_str()]);
    }
    flow.image(&stage.stage_name, chart_png);
    flow.finish()
}

pub(super) fn build_layout(
    report: &Report,
    renderer: &impl ChartRenderer,
) -> Result<ReportLayout, ReportError> {
    let mut pages = Vec::with_capacity(report.stages.len() + 1);
    pages.push(cover_page(report));

    for stage in &report.stages {
        let chart_png = renderer
            .render(&stage.stage_name, stage.values())
            .map_err(|source| ReportError::Chart {
                stage: stage.stage_name.clone(),
                source,
            })?;
        pages.push(stage_page(stage, chart_png));
    }

    Ok(ReportLayout { pages })
}
