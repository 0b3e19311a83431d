use std::sync::Arc;

use crate::config::Config;
use crate::models::catalog::Catalog;
use crate::report::ReportRenderer;
use crate::services::assignment::AssignmentEngine;
use crate::services::mark_foil::{
    FoilNumberSource, MarkFoilSession, RandomFoilNumbers, SharedMarkFoilSession,
};
use crate::store::RecordStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: RecordStore,
    pub engine: AssignmentEngine,
    pub renderer: ReportRenderer,
    pub mark_foil: SharedMarkFoilSession,
    pub config: Config,
}

impl AppState {
    /// Builds a fresh session. The mark foil generator is seeded from
    /// `MARK_FOIL_SEED` when set.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let source = match config.mark_foil_seed {
            Some(seed) => RandomFoilNumbers::seeded(seed),
            None => RandomFoilNumbers::from_entropy(),
        };
        Self::with_foil_source(config, catalog, Box::new(source))
    }

    pub fn with_foil_source(
        config: Config,
        catalog: Catalog,
        source: Box<dyn FoilNumberSource>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            engine: AssignmentEngine::new(catalog.clone()),
            renderer: ReportRenderer::new(config.headers.clone()),
            catalog,
            store: RecordStore::new(),
            mark_foil: MarkFoilSession::new(source).shared(),
            config,
        }
    }
}

impl FromRef<AppState> for RecordStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<Catalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}
