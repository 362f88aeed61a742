use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Judge;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// External judge. `LlmClient` in production, a fake in tests.
    pub judge: Arc<dyn Judge>,
    pub config: Config,
}
