use std::sync::Arc;

use crate::store::PromptStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable prompt store. Mongo in production, in-memory for tests and local runs.
    pub store: Arc<dyn PromptStore>,
}
