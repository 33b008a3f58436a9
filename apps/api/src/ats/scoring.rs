/// Points deducted from a perfect score for each warning.
pub const ISSUE_POINTS: u32 = 10;

/// Score for a résumé with no warnings.
pub const MAX_SCORE: u32 = 100;

/// Converts a warning list into a 0–100 compatibility score.
/// Only the number of warnings matters, not their content.
pub fn calc_ats_score<S: AsRef<str>>(warnings: &[S]) -> u32 {
    score_for_count(warnings.len())
}

/// `max(0, 100 - ISSUE_POINTS * count)`, saturating for any count.
pub fn score_for_count(count: usize) -> u32 {
    let deduction = u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(ISSUE_POINTS);
    MAX_SCORE.saturating_sub(deduction)
}
