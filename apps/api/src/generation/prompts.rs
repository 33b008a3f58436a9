use serde::Serialize;

use crate::llm_client::prompts::{ATS_WRITING_GUIDELINES, JSON_ONLY_INSTRUCTION};

fn candidate_json<T: Serialize>(candidate: &T) -> String {
    serde_json::to_string_pretty(candidate).unwrap_or_else(|_| "{}".to_string())
}

/// Prompt for the structured résumé builder.
pub fn build_resume_prompt<T: Serialize>(job_position: &str, candidate: &T) -> String {
    format!(
        r#"You are an expert resume writer. Create an ATS-optimized resume for the position of "{job_position}" from the candidate data below.

CANDIDATE DATA
--------------
{data}

{ATS_WRITING_GUIDELINES}

Return a JSON object with exactly this structure:

{{
  "professionalSummary": string,
  "resumeSections": [
    {{ "sectionName": string, "content": string | string[] }}
  ],
  "atsOptimizationTips": string[],
  "keywords": string[]
}}

Include sections for every kind of data the candidate provided (experience,
projects, skills, education, certifications, languages, achievements, links).

{JSON_ONLY_INSTRUCTION}"#,
        data = candidate_json(candidate),
    )
}

/// Prompt for the single-document ATS résumé.
pub fn build_ats_resume_prompt<T: Serialize>(
    target_job_title: &str,
    target_job_description: &str,
    candidate: &T,
) -> String {
    let target = match (target_job_title.is_empty(), target_job_description.is_empty()) {
        (true, true) => "No target role was given; write a general-purpose resume.".to_string(),
        _ => format!(
            "TARGET ROLE: {target_job_title}\nTARGET JOB DESCRIPTION:\n{target_job_description}"
        ),
    };

    format!(
        r#"You are an expert resume writer. Write a complete, ATS-friendly resume as plain text.

{target}

CANDIDATE DATA
--------------
{data}

{ATS_WRITING_GUIDELINES}
Put the candidate's email and phone number on the first line under their name,
written as given.

Return a JSON object with exactly this structure:

{{ "atsResume": string }}

{JSON_ONLY_INSTRUCTION}"#,
        data = candidate_json(candidate),
    )
}
