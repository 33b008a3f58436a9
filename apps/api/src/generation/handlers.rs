//! Axum route handlers for résumé generation.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_ats_resume, generate_resume};
use crate::generation::models::{
    AtsResumeRequest, AtsResumeResponse, GenerateResumeResponse, ResumeBuilderRequest,
};
use crate::state::AppState;

/// POST /api/resume/generate-resume
///
/// Structured résumé (summary + sections) with an `ats` report over its text.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeBuilderRequest>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let response = generate_resume(state.llm.as_ref(), &request).await?;
    Ok(Json(response))
}

/// POST /api/resume/generate-ats-resume
pub async fn handle_generate_ats_resume(
    State(state): State<AppState>,
    Json(request): Json<AtsResumeRequest>,
) -> Result<Json<AtsResumeResponse>, AppError> {
    let response = generate_ats_resume(state.llm.as_ref(), &request).await?;
    Ok(Json(response))
}
