//! ATS compatibility: heuristic detection plus a count-based score.
//!
//! Pure and synchronous. Handlers call [`AtsReport::assess`] inline before
//! any model call and merge the result into their response as `ats`.

pub mod detector;
pub mod scoring;

use serde::{Deserialize, Serialize};

pub use detector::detect_ats_issues;
pub use scoring::calc_ats_score;

/// Score and warnings for one piece of résumé text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub warnings: Vec<String>,
}

impl AtsReport {
    pub fn assess(text: &str) -> Self {
        let warnings = detect_ats_issues(text);
        let score = calc_ats_score(&warnings);
        Self { score, warnings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_empty_text() {
        let report = AtsReport::assess("");
        assert_eq!(report.score, 80);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_assess_score_matches_warning_count() {
        let report = AtsReport::assess("┌────┐ images of résumé");
        assert_eq!(
            report.score,
            100 - 10 * report.warnings.len() as u32
        );
    }

    #[test]
    fn test_report_serializes_as_score_and_warnings() {
        let report = AtsReport::assess("");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["score"], 80);
        assert_eq!(value["warnings"][0], "Missing or invalid contact information.");
    }
}
