use crate::{
    access::{AuthorizationError, RequestContext},
    chart::fixture::{FailingRenderer, SolidRenderer},
    indicators::StageTotals,
    store::fixture::RecordingSource,
};

use super::{load_page, prepare_download, PageError, TableRow};

fn etapa_1_fixture() -> RecordingSource {
    RecordingSource::new()
        .with_profile("Ana", "Cerâmica Sul")
        .with_totals(
            "Etapa 1",
            StageTotals {
                energy: 10.0,
                water: 5.0,
                co2: 3.0,
            },
        )
}

#[test]
fn forbidden_role_never_reaches_the_store() {
    for context in [
        RequestContext::new(1, "Visitante"),
        RequestContext::new(1, ""),
        RequestContext::anonymous(),
    ] {
        let source = etapa_1_fixture();
        let renderer = SolidRenderer::default();

        let page = load_page(&context, &source, &renderer);
        assert!(matches!(page, Err(PageError::Unauthorized(_))));

        let download = prepare_download(&context, &source, &renderer);
        assert!(matches!(download, Err(PageError::Unauthorized(_))));

        assert_eq!(source.calls(), 0);
        assert!(renderer.rendered().is_empty());
    }
}

#[test]
fn unauthorized_message_is_the_permission_notice() {
    let error = PageError::from(AuthorizationError::MissingRole);
    assert_eq!(
        error.user_message(),
        "Você não tem permissão para acessar esta página."
    );
}

#[test]
fn page_has_one_section_per_stage() {
    let source = etapa_1_fixture();
    let page = load_page(
        &RequestContext::new(1, "Usuario"),
        &source,
        &SolidRenderer::default(),
    )
    .expect("page");

    assert_eq!(page.title, "Relatórios - Indicadores de Pegada de Carbono");
    assert_eq!(page.identity.user_name, "Ana");
    assert_eq!(page.sections.len(), 3);

    let first = &page.sections[0];
    assert_eq!(first.heading, "Etapa 1");
    assert_eq!(first.caption, "Gráfico - Etapa 1");
    assert!(!first.chart_png.is_empty());
    assert_eq!(
        first.rows,
        vec![
            TableRow {
                indicator: "Energia",
                value: "10".to_string(),
            },
            TableRow {
                indicator: "Água",
                value: "5".to_string(),
            },
            TableRow {
                indicator: "CO2",
                value: "3".to_string(),
            },
        ]
    );
    assert!(page.sections[1..]
        .iter()
        .all(|section| section.rows.iter().all(|row| row.value == "0")));
}

#[test]
fn missing_identity_does_not_fail_the_page() {
    let page = load_page(
        &RequestContext::new(2, "Adm"),
        &RecordingSource::new(),
        &SolidRenderer::default(),
    )
    .expect("page");

    assert_eq!(page.identity.user_name, "Usuário");
    assert_eq!(page.identity.company_name, "Empresa");
}

#[test]
fn download_is_a_named_pdf() {
    let download = prepare_download(
        &RequestContext::new(1, "Adm"),
        &etapa_1_fixture(),
        &SolidRenderer::default(),
    )
    .expect("download");

    assert_eq!(download.file_name, "relatorio_indicadores.pdf");
    assert_eq!(download.mime_type, "application/pdf");
    assert!(download.bytes.starts_with(b"%PDF"));
}

#[test]
fn store_failure_aborts_the_download() {
    let result = prepare_download(
        &RequestContext::new(1, "Usuario"),
        &RecordingSource::new().failing(),
        &SolidRenderer::default(),
    );
    assert!(matches!(result, Err(PageError::Store(_))));
}

#[test]
fn chart_failure_aborts_the_page() {
    let result = load_page(
        &RequestContext::new(1, "Usuario"),
        &etapa_1_fixture(),
        &FailingRenderer,
    );
    assert!(matches!(result, Err(PageError::Chart { .. })));
}
