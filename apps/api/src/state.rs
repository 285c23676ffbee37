use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionGateway;
use crate::roadmap::generator::GenerationOptions;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests never coordinate through it.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation capability. Production: `OpenAiClient`; tests: a canned double.
    pub gateway: Arc<dyn CompletionGateway>,
    pub config: Config,
}

impl AppState {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            profile: self.config.profile,
            strict_schema: self.config.strict_schema,
        }
    }
}
