use std::sync::Arc;

use crate::llm_client::LanguageModel;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative model behind analysis and generation. Default: `GeminiClient`.
    pub llm: Arc<dyn LanguageModel>,
    /// Where uploaded résumé files go. Default: `S3ResumeStore`.
    pub store: Arc<dyn ResumeStore>,
}
