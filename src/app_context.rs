use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::{chart::PlottersRenderer, config::Config, store::SqliteStore};

#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub store: SqliteStore,
    pub chart_renderer: PlottersRenderer,
    pub report_slots: Arc<Semaphore>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            store: SqliteStore::new(&config.database_path),
            chart_renderer: PlottersRenderer::from_config(&config.chart),
            report_slots: Arc::new(Semaphore::new(config.report_concurrency)),
            config,
        }
    }
}
