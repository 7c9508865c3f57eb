use std::sync::Arc;

use crate::llm_client::AiClient;
use crate::translation::fallback::FallbackTranslator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Gemini handle, or `Disabled` when no key/model was usable at startup.
    pub ai: Arc<AiClient>,
    /// Secondary translator used only when the AI path is unavailable or fails.
    pub fallback: Arc<dyn FallbackTranslator>,
}
