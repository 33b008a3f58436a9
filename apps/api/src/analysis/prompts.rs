use crate::ats::AtsReport;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Builds the résumé vs. job-description analysis prompt.
///
/// The locally computed ATS report is included so the model's formatting
/// advice agrees with it; the handler still overwrites `ats` in the reply.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str, ats: &AtsReport) -> String {
    let warnings = serde_json::to_string(&ats.warnings).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"You are a senior career advisor with 15+ years of technical recruiting experience.
Analyze the resume against the job description in detail.

RESUME CONTENT
--------------
{resume_text}

JOB DESCRIPTION
---------------
{job_description}

INSTRUCTIONS:
1. Overall match score from 0-100, weighted: skill alignment 40%, experience 30%,
   education 20%, cultural fit 10%.
2. Skill gaps: 3 missing hard skills, each marked "critical" or "nice-to-have",
   with learning resource links and related certifications.
3. Experience match: years of relevant experience per key skill or responsibility,
   flagging transferable skills where exact matches are missing.
4. Education and certification alignment, with suggested certifications.
5. Resume formatting and ATS tips (keyword density, section ordering, fonts).
   An automated ATS check already scored this resume {ats_score}/100 with these
   warnings: {warnings}
6. Soft skills in the resume that fit the role's culture, and ones to emphasize.
7. Actionable summary: strengths and the top 3 prioritized actions.
8. Example bullet points that quantify achievements for weak areas.
9. Keywords from the job description, and which of them the resume is missing.
10. Interview preparation: likely questions and practice resources.
11. A comparison with typical top candidates for this role, if possible.

Return a JSON object with exactly this structure:

{{
  "score": number,
  "skillGapAnalysis": [
    {{
      "skill": string,
      "importance": "critical" | "nice-to-have",
      "resourceLinks": string[],
      "recommendedCertifications": string[]
    }}
  ],
  "experienceMatch": [
    {{
      "skillOrResponsibility": string,
      "yearsExperience": number,
      "transferableSkill": boolean,
      "notes": string
    }}
  ],
  "educationAndCertifications": {{
    "matchAnalysis": string,
    "suggestedCertifications": string[]
  }},
  "resumeFormattingTips": string,
  "softSkillsCulturalFit": {{
    "matchedSoftSkills": string[],
    "suggestedSoftSkills": string[]
  }},
  "actionableSummary": {{
    "strengths": string[],
    "topActions": string[]
  }},
  "exampleBulletPoints": string[],
  "jobDescriptionKeywords": {{
    "requiredKeywords": string[],
    "missingKeywords": string[]
  }},
  "interviewPrepTips": {{
    "commonQuestions": string[],
    "recommendedResources": string[]
  }},
  "candidateComparison": string,
  "ats": {{
    "score": {ats_score},
    "warnings": {warnings}
  }}
}}

{JSON_ONLY_INSTRUCTION}"#,
        ats_score = ats.score,
    )
}
