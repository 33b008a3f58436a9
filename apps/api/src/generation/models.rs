use serde::{Deserialize, Serialize};

use crate::ats::AtsReport;

// ────────────────────────────────────────────────────────────────────────────
// Résumé builder (POST /api/resume/generate-resume)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeBuilderRequest {
    pub job_position: String,
    #[serde(rename = "Fullname")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub skills: Vec<String>,
    pub work_experience: Vec<BuilderWorkEntry>,
    pub projects: Vec<BuilderProject>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub achievements: Vec<String>,
    pub portfolio_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderWorkEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderProject {
    pub title: String,
    pub description: String,
    /// Free text, e.g. "Rust, Postgres".
    pub technologies: String,
}

/// A section body is either a paragraph or a list of bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    Bullets(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSection {
    pub section_name: String,
    pub content: SectionContent,
}

/// Structured résumé written by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResume {
    pub professional_summary: String,
    pub resume_sections: Vec<ResumeSection>,
    #[serde(default)]
    pub ats_optimization_tips: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResumeResponse {
    #[serde(flatten)]
    pub resume: GeneratedResume,
    pub ats: AtsReport,
}

// ────────────────────────────────────────────────────────────────────────────
// ATS résumé form (POST /api/resume/generate-ats-resume)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtsResumeRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub portfolio_url: String,
    pub linkedin_url: String,
    pub professional_summary: String,
    // Sent to the model as the TARGET block, capped, not as candidate data
    #[serde(skip_serializing)]
    pub target_job_title: String,
    #[serde(skip_serializing)]
    pub target_job_description: String,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub work_experience: Vec<Position>,
    pub projects: Vec<Project>,
    pub certificates: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

impl AtsResumeRequest {
    /// Name, email, phone, at least one non-blank skill and one education entry.
    pub fn has_required_fields(&self) -> bool {
        let filled = |s: &str| !s.trim().is_empty();
        filled(&self.name)
            && filled(&self.email)
            && filled(&self.phone)
            && self.skills.iter().any(|s| filled(s))
            && !self.education.is_empty()
    }
}

/// What the model returns for the ATS résumé form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResumeDraft {
    pub ats_resume: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResumeAnalysis {
    pub score: u32,
    pub top_improvements: Vec<String>,
}

impl From<AtsReport> for AtsResumeAnalysis {
    fn from(report: AtsReport) -> Self {
        Self {
            score: report.score,
            top_improvements: report.warnings,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResumeResponse {
    pub ats_resume: String,
    pub analysis: AtsResumeAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_request_reads_client_field_names() {
        let request: ResumeBuilderRequest = serde_json::from_value(json!({
            "jobPosition": "Backend Engineer",
            "Fullname": "Jane Doe",
            "skills": ["Rust", "SQL"],
            "workExperience": [{"role": "SWE", "company": "Acme", "duration": "2y", "description": "APIs"}],
            "projects": [{"title": "ledger", "description": "", "technologies": "Rust, Postgres"}]
        }))
        .unwrap();
        assert_eq!(request.full_name, "Jane Doe");
        assert_eq!(request.work_experience[0].company, "Acme");
        assert_eq!(request.projects[0].technologies, "Rust, Postgres");
        assert!(request.certifications.is_empty());
    }

    #[test]
    fn test_section_content_accepts_text_or_bullets() {
        let section: ResumeSection =
            serde_json::from_value(json!({"sectionName": "Skills", "content": ["Rust", "Go"]}))
                .unwrap();
        assert_eq!(
            section.content,
            SectionContent::Bullets(vec!["Rust".to_string(), "Go".to_string()])
        );

        let section: ResumeSection =
            serde_json::from_value(json!({"sectionName": "Education", "content": "BSc CS"}))
                .unwrap();
        assert_eq!(section.content, SectionContent::Text("BSc CS".to_string()));
    }

    #[test]
    fn test_required_fields_for_ats_form() {
        let mut request = AtsResumeRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "5551234567".into(),
            skills: vec!["Rust".into()],
            education: vec![Education::default()],
            ..Default::default()
        };
        assert!(request.has_required_fields());

        request.skills = vec!["  ".into()];
        assert!(!request.has_required_fields());

        request.skills = vec!["Rust".into()];
        request.education.clear();
        assert!(!request.has_required_fields());
    }

    #[test]
    fn test_ats_analysis_uses_warnings_as_improvements() {
        let analysis = AtsResumeAnalysis::from(AtsReport::assess(""));
        let value = serde_json::to_value(analysis).unwrap();
        assert_eq!(value["score"], 80);
        assert_eq!(value["topImprovements"].as_array().unwrap().len(), 2);
    }
}
