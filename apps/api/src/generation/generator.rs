//! Generation pipeline: validate → prompt → model → local ATS check.

use tracing::info;

use crate::ats::AtsReport;
use crate::errors::AppError;
use crate::generation::models::{
    AtsResumeDraft, AtsResumeRequest, AtsResumeResponse, GenerateResumeResponse,
    GeneratedResume, ResumeBuilderRequest, SectionContent,
};
use crate::generation::prompts::{build_ats_resume_prompt, build_resume_prompt};
use crate::llm_client::{generate_json, LanguageModel, LlmError};
use crate::text::{normalize_input, MAX_INPUT_UNITS};

/// Builds a structured résumé and scores its plain-text rendering.
pub async fn generate_resume(
    llm: &dyn LanguageModel,
    request: &ResumeBuilderRequest,
) -> Result<GenerateResumeResponse, AppError> {
    let job_position = request.job_position.trim();
    if job_position.is_empty() {
        return Err(AppError::Validation("jobPosition cannot be empty".to_string()));
    }

    let prompt = build_resume_prompt(job_position, request);
    let resume: GeneratedResume = generate_json(llm, &prompt).await?;

    let ats = AtsReport::assess(&render_plain_text(job_position, &resume));
    info!(
        sections = resume.resume_sections.len(),
        ats_score = ats.score,
        "Generated resume for {job_position}"
    );

    Ok(GenerateResumeResponse { resume, ats })
}

/// Writes a single plain-text ATS résumé and scores it.
pub async fn generate_ats_resume(
    llm: &dyn LanguageModel,
    request: &AtsResumeRequest,
) -> Result<AtsResumeResponse, AppError> {
    if !request.has_required_fields() {
        return Err(AppError::Validation(
            "Missing required fields: Name, Email, Phone, Skills, and Education are mandatory"
                .to_string(),
        ));
    }

    let prompt = build_ats_resume_prompt(
        request.target_job_title.trim(),
        normalize_input(&request.target_job_description, MAX_INPUT_UNITS),
        request,
    );
    let draft: AtsResumeDraft = generate_json(llm, &prompt).await?;
    if draft.ats_resume.trim().is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    let ats = AtsReport::assess(&draft.ats_resume);
    info!(ats_score = ats.score, "Generated ATS resume");

    Ok(AtsResumeResponse {
        ats_resume: draft.ats_resume,
        analysis: ats.into(),
    })
}

/// Plain-text layout of a generated résumé, the form it is downloaded in.
/// Bullet glyphs are kept, so bulleted sections trip the non-ASCII rule.
pub fn render_plain_text(job_position: &str, resume: &GeneratedResume) -> String {
    let mut out = format!(
        "RESUME - {job_position}\n\nProfessional Summary:\n{}\n\n",
        resume.professional_summary
    );
    for section in &resume.resume_sections {
        out.push_str(&section.section_name);
        out.push_str(":\n");
        match &section.content {
            SectionContent::Bullets(items) => {
                for item in items {
                    out.push_str("• ");
                    out.push_str(item);
                    out.push('\n');
                }
            }
            SectionContent::Text(text) => {
                out.push_str(text);
                out.push('\n');
            }
        }
        out.push('\n');
    }
    out
}
