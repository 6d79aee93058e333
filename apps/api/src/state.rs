use std::sync::Arc;

use crate::config::Config;
use crate::crew::Orchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable orchestrator. Default: SequentialCrew over the chat-completions API.
    pub orchestrator: Arc<dyn Orchestrator>,
}
