use chrono::NaiveDate;

use crate::{
    chart::{
        fixture::{FailingRenderer, SolidRenderer},
        PlottersRenderer,
    },
    identity::Identity,
    indicators::{StageAggregate, StageTotals},
};

use super::{build_report, format_value, layout::LayoutItem, Report, ReportError};

fn identity() -> Identity {
    Identity {
        user_id: 1,
        user_name: "Ana".to_string(),
        company_name: "Cerâmica Sul".to_string(),
    }
}

fn stage(name: &str, energy: f64, water: f64, co2: f64) -> StageAggregate {
    StageAggregate::from_totals(name, StageTotals { energy, water, co2 })
}

fn three_stages() -> Vec<StageAggregate> {
    vec![
        stage("Etapa 1", 10.0, 5.0, 3.0),
        stage("Etapa 2", 0.0, 0.0, 0.0),
        stage("Etapa 3", 1.5, 250.0, 0.25),
    ]
}

fn report(stages: Vec<StageAggregate>) -> Report {
    Report::new(
        identity(),
        stages,
        NaiveDate::from_ymd_opt(2025, 1, 18).expect("date"),
    )
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

#[test]
fn cover_page_lists_title_user_company_and_date() {
    let layout = report(three_stages())
        .layout(&SolidRenderer::default())
        .expect("layout");

    let cover = layout.pages[0].texts().collect::<Vec<_>>();
    assert_eq!(
        cover,
        vec![
            "Relatório de Indicadores - Pegada de Carbono",
            "Usuário: Ana",
            "Empresa: Cerâmica Sul",
            "Data: 18/01/2025",
        ]
    );
    assert_eq!(layout.pages[0].image_count(), 0);
}

#[test]
fn one_page_per_stage_in_aggregator_order() {
    let renderer = SolidRenderer::default();
    let layout = report(three_stages()).layout(&renderer).expect("layout");

    assert_eq!(layout.pages.len(), 4);
    let headings = layout.pages[1..]
        .iter()
        .map(|page| page.texts().next().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(headings, vec!["Etapa 1", "Etapa 2", "Etapa 3"]);
    assert_eq!(renderer.rendered(), vec!["Etapa 1", "Etapa 2", "Etapa 3"]);
    assert!(layout.pages[1..].iter().all(|page| page.image_count() == 1));
}

#[test]
fn table_rows_keep_indicator_order_regardless_of_magnitude() {
    let layout = report(vec![stage("Etapa 1", 1.0, 50.0, 9000.0)])
        .layout(&SolidRenderer::default())
        .expect("layout");

    let texts = layout.pages[1].texts().collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![
            "Etapa 1", "Indicador", "Valor", "Energia", "1", "Água", "50", "CO2", "9000",
        ]
    );
}

#[test]
fn chart_sits_below_the_table() {
    let layout = report(vec![stage("Etapa 1", 1.0, 2.0, 3.0)])
        .layout(&SolidRenderer::default())
        .expect("layout");

    let last_cell_bottom = layout.pages[1]
        .items
        .iter()
        .filter_map(|item| match item {
            LayoutItem::Cell {
                y_mm, height_mm, ..
            } => Some(y_mm + height_mm),
            LayoutItem::Image { .. } => None,
        })
        .fold(0.0_f64, f64::max);
    let image_top = layout.pages[1]
        .items
        .iter()
        .find_map(|item| match item {
            LayoutItem::Image { y_mm, width_mm, .. } => Some((*y_mm, *width_mm)),
            LayoutItem::Cell { .. } => None,
        })
        .expect("chart image");

    assert!(image_top.0 >= last_cell_bottom);
    assert_eq!(image_top.1, 100.0);
}

#[test]
fn pdf_has_cover_plus_stage_pages() {
    let bytes = report(three_stages())
        .render_pdf(&SolidRenderer::default())
        .expect("pdf");

    assert!(bytes.starts_with(b"%PDF-1.5"));
    let document = lopdf::Document::load_mem(&bytes).expect("parse pdf");
    let pages = document.get_pages();
    assert_eq!(pages.len(), 4);

    let third_page = pages.get(&3).copied().expect("page 3");
    let content = document.get_page_content(third_page).expect("content");
    assert!(contains(&content, b"(Etapa 2)"));
}

#[test]
fn pdf_without_stages_is_just_the_cover() {
    let bytes = report(Vec::new())
        .render_pdf(&SolidRenderer::default())
        .expect("pdf");

    let document = lopdf::Document::load_mem(&bytes).expect("parse pdf");
    assert_eq!(document.get_pages().len(), 1);
}

#[test]
fn chart_failure_fails_the_whole_report() {
    let result = build_report(&identity(), &three_stages(), &FailingRenderer);
    assert!(matches!(
        result,
        Err(ReportError::Chart { ref stage, .. }) if stage == "Etapa 1"
    ));
}

#[test]
fn values_render_as_plain_numbers() {
    assert_eq!(format_value(10.0), "10");
    assert_eq!(format_value(10.5), "10.5");
    assert_eq!(format_value(0.25), "0.25");
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(-3.0), "-3");
}

#[test]
fn pdf_embeds_plotted_charts() {
    let bytes = build_report(
        &identity(),
        &[stage("Etapa 1", 10.0, 5.0, 3.0)],
        &PlottersRenderer::new(500, 300),
    )
    .expect("pdf");

    let document = lopdf::Document::load_mem(&bytes).expect("parse pdf");
    assert_eq!(document.get_pages().len(), 2);
}
