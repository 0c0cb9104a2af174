use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; nothing here carries per-request state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable model backend. Default: `LlmClient` against OpenRouter.
    pub llm: Arc<dyn TextGenerator>,
}
