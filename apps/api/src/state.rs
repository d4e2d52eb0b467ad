use std::sync::Arc;

use crate::scoring::PriorityScorer;
use crate::store::ApplicationStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ApplicationStore>,
    /// Holds the skill corpus loaded once at startup.
    pub scorer: Arc<PriorityScorer>,
}
