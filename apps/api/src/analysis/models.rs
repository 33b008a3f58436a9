use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::ats::AtsReport;

/// Career analysis returned by the model.
///
/// Only the top-level shape is enforced: numbers, strings, arrays and objects
/// where the prompt asks for them. Object fields must be present but may be
/// `null`. Anything nested is passed through as-is, as are keys the prompt
/// did not ask for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub score: Number,
    pub skill_gap_analysis: Vec<Value>,
    pub experience_match: Vec<Value>,
    #[serde(deserialize_with = "object_or_null")]
    pub education_and_certifications: Option<Map<String, Value>>,
    pub resume_formatting_tips: String,
    #[serde(deserialize_with = "object_or_null")]
    pub soft_skills_cultural_fit: Option<Map<String, Value>>,
    #[serde(deserialize_with = "object_or_null")]
    pub actionable_summary: Option<Map<String, Value>>,
    pub example_bullet_points: Vec<Value>,
    #[serde(deserialize_with = "object_or_null")]
    pub job_description_keywords: Option<Map<String, Value>>,
    #[serde(deserialize_with = "object_or_null")]
    pub interview_prep_tips: Option<Map<String, Value>>,
    pub candidate_comparison: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Unlike a plain `Option` field, a missing key is still an error.
fn object_or_null<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Map<String, Value>>::deserialize(deserializer)
}

/// The model's analysis with the locally computed ATS report attached.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub analysis: CareerAnalysis,
    pub ats: AtsReport,
}

impl AnalysisResponse {
    /// Any `ats` block the model echoed back is replaced by `ats`.
    pub fn new(mut analysis: CareerAnalysis, ats: AtsReport) -> Self {
        analysis.extra.remove("ats");
        Self { analysis, ats }
    }
}
