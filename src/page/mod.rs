use thiserror::Error;

use crate::{
    access::{authorize, AuthorizationError, RequestContext},
    chart::{ChartError, ChartRenderer},
    identity::{resolve_identity, Identity},
    indicators::{compute_aggregates, StageAggregate},
    report::{build_report, format_value, ReportError},
    store::{IndicatorSource, StoreError},
};

pub const PAGE_TITLE: &str = "Relatórios - Indicadores de Pegada de Carbono";
pub const REPORT_FILE_NAME: &str = "relatorio_indicadores.pdf";
pub const REPORT_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Unauthorized(#[from] AuthorizationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("chart for {stage} failed: {source}")]
    Chart { stage: String, source: ChartError },
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl PageError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(error) => error.code(),
            Self::Store(_) => "PAGE_DATA_ACCESS_ERROR",
            Self::Chart { source, .. } => source.code(),
            Self::Report(error) => error.code(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unauthorized(error) => error.user_message(),
            Self::Report(_) => "Não foi possível gerar o relatório agora. Tente novamente.",
            Self::Store(_) | Self::Chart { .. } => {
                "Não foi possível carregar os indicadores agora. Tente novamente."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub indicator: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSection {
    pub heading: String,
    pub rows: Vec<TableRow>,
    pub chart_png: Vec<u8>,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPage {
    pub title: &'static str,
    pub identity: Identity,
    pub sections: Vec<PageSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDownload {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

fn section(
    stage: &StageAggregate,
    renderer: &impl ChartRenderer,
) -> Result<PageSection, PageError> {
    let rows = stage
        .rows()
        .map(|(indicator, value)| TableRow {
            indicator: indicator.label(),
            value: format_value(value),
        })
        .collect();
    let chart_png = renderer
        .render(&stage.stage_name, stage.values())
        .map_err(|source| PageError::Chart {
            stage: stage.stage_name.clone(),
            source,
        })?;

    Ok(PageSection {
        heading: stage.stage_name.clone(),
        rows,
        chart_png,
        caption: format!("Gráfico - {}", stage.stage_name),
    })
}

/// Authorizes the caller, then loads identity, aggregates and one table and
/// chart per stage. Nothing touches the store when authorization fails.
pub fn load_page(
    context: &RequestContext,
    source: &impl IndicatorSource,
    renderer: &impl ChartRenderer,
) -> Result<IndicatorPage, PageError> {
    let user = authorize(context)?;
    log::debug!("page_requested user_id={} role={}", user.user_id, user.role);
    let identity = resolve_identity(source, user.user_id)?;
    let aggregates = compute_aggregates(source, user.user_id)?;

    let sections = aggregates
        .iter()
        .map(|stage| section(stage, renderer))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(IndicatorPage {
        title: PAGE_TITLE,
        identity,
        sections,
    })
}

/// Builds the PDF behind the download action.
pub fn prepare_download(
    context: &RequestContext,
    source: &impl IndicatorSource,
    renderer: &impl ChartRenderer,
) -> Result<ReportDownload, PageError> {
    let user = authorize(context)?;
    log::debug!("download_requested user_id={} role={}", user.user_id, user.role);
    let identity = resolve_identity(source, user.user_id)?;
    let aggregates = compute_aggregates(source, user.user_id)?;
    let bytes = build_report(&identity, &aggregates, renderer)?;

    Ok(ReportDownload {
        file_name: REPORT_FILE_NAME,
        mime_type: REPORT_MIME_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests;
