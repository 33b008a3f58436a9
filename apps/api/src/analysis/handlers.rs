use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::{AnalysisResponse, CareerAnalysis};
use crate::analysis::prompts::build_analysis_prompt;
use crate::ats::AtsReport;
use crate::errors::AppError;
use crate::llm_client::generate_json;
use crate::state::AppState;
use crate::text::{normalize_input, MAX_INPUT_UNITS};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

/// POST /api/resume/analyze
///
/// Both inputs are trimmed and capped before use. The ATS report is computed
/// from the capped résumé text before the model is called and always wins
/// over whatever `ats` block the model returns.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let resume_text = normalize_input(
        request.resume_text.as_deref().unwrap_or_default(),
        MAX_INPUT_UNITS,
    );
    let job_description = normalize_input(
        request.job_description.as_deref().unwrap_or_default(),
        MAX_INPUT_UNITS,
    );
    if resume_text.is_empty() || job_description.is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let ats = AtsReport::assess(resume_text);
    info!(
        ats_score = ats.score,
        warnings = ats.warnings.len(),
        "Analyzing resume against job description"
    );

    let prompt = build_analysis_prompt(resume_text, job_description, &ats);
    let analysis: CareerAnalysis = generate_json(state.llm.as_ref(), &prompt).await?;

    Ok(Json(AnalysisResponse::new(analysis, ats)))
}
