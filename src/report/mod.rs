mod error;
mod layout;
mod pdf;

pub use error::ReportError;
pub use layout::{format_value, ReportLayout};

use std::time::Instant;

use chrono::{Local, NaiveDate};

use crate::{chart::ChartRenderer, identity::Identity, indicators::StageAggregate};

/// Everything one PDF export needs. Lives only for the duration of a build.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub identity: Identity,
    pub stages: Vec<StageAggregate>,
    pub generated_on: NaiveDate,
}

impl Report {
    pub fn new(identity: Identity, stages: Vec<StageAggregate>, generated_on: NaiveDate) -> Self {
        Self {
            identity,
            stages,
            generated_on,
        }
    }

    /// Cover page plus one page per stage, charts already rendered.
    pub fn layout(&self, renderer: &impl ChartRenderer) -> Result<ReportLayout, ReportError> {
        layout::build_layout(self, renderer)
    }

    pub fn render_pdf(&self, renderer: &impl ChartRenderer) -> Result<Vec<u8>, ReportError> {
        let started_at = Instant::now();
        let layout = self.layout(renderer)?;
        let bytes = pdf::write_pdf(&layout)?;

        log::info!(
            "report_built user_id={} pages={} bytes={} elapsed_ms={}",
            self.identity.user_id,
            layout.pages.len(),
            bytes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(bytes)
    }
}

/// Builds the PDF dated today (local time). Either the whole document is
/// produced or an error is returned.
pub fn build_report(
    identity: &Identity,
    aggregates: &[StageAggregate],
    renderer: &impl ChartRenderer,
) -> Result<Vec<u8>, ReportError> {
    Report::new(
        identity.clone(),
        aggregates.to_vec(),
        Local::now().date_naive(),
    )
    .render_pdf(renderer)
}

#[cfg(test)]
mod tests;
