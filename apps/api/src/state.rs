use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommend::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Runtime settings; no handler reads these yet.
    #[allow(dead_code)]
    pub config: Config,
    pub engine: Arc<RecommendationEngine>,
}
