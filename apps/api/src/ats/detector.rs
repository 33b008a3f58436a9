//! ATS issue detection: heuristic red flags in extracted résumé text.
//!
//! Every rule runs on every input and contributes at most one fixed warning.
//! The checks are deliberately crude (a phone number must be a bare run of
//! ten digits, a "Graphics Designer" title reads as an embedded image) and
//! the score downstream depends on that exact behaviour.

use std::sync::OnceLock;

use regex::Regex;

use crate::text::utf16_prefix;

const MISSING_CONTACT: &str = "Missing or invalid contact information.";
const TABLE_LAYOUT: &str = "Tables or multi-column layout detected – ATS may mis-read.";
const NON_ASCII: &str = "Non-ASCII characters (fancy fonts / emojis) detected.";
const LOW_ACTION_VERBS: &str = "Very few action verbs – may hurt keyword ranking.";
const EMBEDDED_IMAGE: &str = "Possible image-based header or profile photo detected.";

const ACTION_VERBS: &[&str] = &["developed", "built", "managed", "created", "designed"];

/// Fewer whole-word action verbs than this fires the density rule.
const MIN_ACTION_VERBS: usize = 3;

/// Only the head of the document is scanned for image artifacts.
const IMAGE_SCAN_UNITS: usize = 500;

const IMAGE_MARKERS: &[&str] = &["image", "graphics"];

/// Ten contiguous ASCII digits anywhere in the text.
fn phone_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{10}").expect("phone pattern is valid"))
}

/// A word padded by two or more whitespace characters on both sides,
/// the trace columns leave after text extraction.
fn column_gap() -> &'static Regex {
    const WS: &str =
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("{WS}{{2,}}[0-9A-Za-z_]+{WS}{{2,}}"))
            .expect("column gap pattern is valid")
    })
}

/// One heuristic check. Variants are declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsRule {
    MissingContact,
    TableLayout,
    NonAscii,
    LowActionVerbs,
    EmbeddedImage,
}

impl AtsRule {
    pub const ALL: [AtsRule; 5] = [
        AtsRule::MissingContact,
        AtsRule::TableLayout,
        AtsRule::NonAscii,
        AtsRule::LowActionVerbs,
        AtsRule::EmbeddedImage,
    ];

    /// The warning reported when this rule fires.
    pub fn warning(self) -> &'static str {
        match self {
            AtsRule::MissingContact => MISSING_CONTACT,
            AtsRule::TableLayout => TABLE_LAYOUT,
            AtsRule::NonAscii => NON_ASCII,
            AtsRule::LowActionVerbs => LOW_ACTION_VERBS,
            AtsRule::EmbeddedImage => EMBEDDED_IMAGE,
        }
    }

    pub fn fires(self, text: &str) -> bool {
        match self {
            AtsRule::MissingContact => !text.contains('@') || !phone_run().is_match(text),
            AtsRule::TableLayout => {
                text.chars().any(is_box_drawing) || column_gap().is_match(text)
            }
            AtsRule::NonAscii => text.chars().filter(|&c| c != '\n').any(|c| !c.is_ascii()),
            AtsRule::LowActionVerbs => count_action_verbs(text) < MIN_ACTION_VERBS,
            AtsRule::EmbeddedImage => {
                let head = utf16_prefix(text, IMAGE_SCAN_UNITS).to_ascii_lowercase();
                IMAGE_MARKERS.iter().any(|marker| head.contains(marker))
            }
        }
    }
}

/// Runs every rule over `text` and returns the warnings of those that fired,
/// in rule order. Total over all inputs.
pub fn detect_ats_issues(text: &str) -> Vec<String> {
    AtsRule::ALL
        .iter()
        .filter(|rule| rule.fires(text))
        .map(|rule| rule.warning().to_string())
        .collect()
}

fn is_box_drawing(c: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&c)
}

fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Counts whole-word, ASCII-case-insensitive action verbs.
///
/// A match bounded by ASCII word boundaries is exactly a maximal run of
/// `[A-Za-z0-9_]`, so splitting on everything else yields the candidates.
fn count_action_verbs(text: &str) -> usize {
    text.split(|c: char| !is_ascii_word(c))
        .filter(|token| {
            ACTION_VERBS
                .iter()
                .any(|verb| token.eq_ignore_ascii_case(verb))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::scoring::calc_ats_score;

    const CLEAN: &str =
        "Contact: jane@example.com, 5551234567. Developed, built, and managed three systems.";

    fn fired(text: &str) -> Vec<AtsRule> {
        AtsRule::ALL
            .iter()
            .copied()
            .filter(|rule| rule.fires(text))
            .collect()
    }

    #[test]
    fn test_empty_text_fires_contact_and_verbs_only() {
        let warnings = detect_ats_issues("");
        assert_eq!(warnings, vec![MISSING_CONTACT, LOW_ACTION_VERBS]);
        assert_eq!(calc_ats_score(&warnings), 80);
    }

    #[test]
    fn test_clean_resume_has_no_warnings() {
        let warnings = detect_ats_issues(CLEAN);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(calc_ats_score(&warnings), 100);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let text = "┌────┐ Graphics Designer, créé";
        assert_eq!(detect_ats_issues(text), detect_ats_issues(text));
    }

    #[test]
    fn test_contact_needs_both_at_sign_and_digits() {
        assert!(AtsRule::MissingContact.fires("jane@example.com only"));
        assert!(AtsRule::MissingContact.fires("call 5551234567"));
        assert!(!AtsRule::MissingContact.fires("jane@example.com 5551234567"));
    }

    #[test]
    fn test_formatted_phone_number_still_fires_contact() {
        // Separators break the ten-digit run
        assert!(AtsRule::MissingContact.fires("jane@example.com (555) 123-4567"));
        assert!(AtsRule::MissingContact.fires("jane@example.com 555-123-4567"));
    }

    #[test]
    fn test_longer_digit_run_contains_a_phone_run() {
        assert!(!AtsRule::MissingContact.fires("jane@example.com +915551234567"));
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_phone_run() {
        assert!(AtsRule::MissingContact.fires("jane@example.com ١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_box_drawing_fires_table_rule() {
        let text = format!("{CLEAN}\n┌────┐");
        assert!(AtsRule::TableLayout.fires(&text));
    }

    #[test]
    fn test_padded_word_fires_table_rule() {
        assert!(AtsRule::TableLayout.fires("Skills   Rust   Go"));
        assert!(AtsRule::TableLayout.fires("Name\n\nExperience\n\n"));
    }

    #[test]
    fn test_single_spaces_do_not_fire_table_rule() {
        assert!(!AtsRule::TableLayout.fires("Skills: Rust, Go and SQL"));
        assert!(!AtsRule::TableLayout.fires("Skills  Rust Go"));
    }

    #[test]
    fn test_padded_punctuation_does_not_fire_table_rule() {
        assert!(!AtsRule::TableLayout.fires("a  --  b"));
    }

    #[test]
    fn test_non_ascii_rule_ignores_newlines() {
        assert!(!AtsRule::NonAscii.fires("line one\nline two\r\n"));
        assert!(AtsRule::NonAscii.fires("Résumé"));
        assert!(AtsRule::NonAscii.fires("Rockstar dev 🚀"));
    }

    #[test]
    fn test_three_action_verbs_is_enough() {
        assert!(!AtsRule::LowActionVerbs.fires("Developed x. BUILT y. managed z."));
        assert!(AtsRule::LowActionVerbs.fires("Developed x. Built y."));
    }

    #[test]
    fn test_repeated_verb_counts_each_occurrence() {
        assert!(!AtsRule::LowActionVerbs.fires("designed, designed, designed"));
    }

    #[test]
    fn test_verbs_must_be_whole_words() {
        assert_eq!(count_action_verbs("redeveloped rebuilt mismanaged"), 0);
        assert_eq!(count_action_verbs("created_by built2 designedx"), 0);
        assert_eq!(count_action_verbs("(created) built-in \"designed\""), 3);
    }

    #[test]
    fn test_non_ascii_letters_act_as_word_boundaries() {
        assert_eq!(count_action_verbs("ébuilt"), 1);
    }

    #[test]
    fn test_graphics_designer_title_fires_image_rule() {
        let text = format!("Graphics Designer\n{CLEAN}");
        assert_eq!(fired(&text), vec![AtsRule::EmbeddedImage]);
    }

    #[test]
    fn test_image_rule_is_case_insensitive_substring() {
        assert!(AtsRule::EmbeddedImage.fires("[IMAGE]"));
        assert!(AtsRule::EmbeddedImage.fires("imagery"));
    }

    #[test]
    fn test_image_rule_only_scans_first_500_units() {
        let late = format!("{}image", "x".repeat(500));
        assert!(!AtsRule::EmbeddedImage.fires(&late));
        let edge = format!("{}image", "x".repeat(495));
        assert!(AtsRule::EmbeddedImage.fires(&edge));
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let text = "Graphics ┌──┐ portfolio 🚀";
        let warnings = detect_ats_issues(text);
        assert_eq!(
            warnings,
            vec![
                MISSING_CONTACT,
                TABLE_LAYOUT,
                NON_ASCII,
                LOW_ACTION_VERBS,
                EMBEDDED_IMAGE
            ]
        );
        assert_eq!(calc_ats_score(&warnings), 50);
    }

    #[test]
    fn test_multibyte_char_at_image_cut_does_not_panic() {
        let text = format!("{}😀image", "x".repeat(499));
        assert!(!AtsRule::EmbeddedImage.fires(&text));
        let text = format!("{}é", "x".repeat(499));
        assert!(!AtsRule::EmbeddedImage.fires(&text));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Text built from the characters the rules look at, so every rule
        /// fires and stays quiet across generated cases.
        fn resume_like() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9@ \t\n_.é😀┌─]{0,700}"
        }

        fn check_report(text: &str) -> Result<(), TestCaseError> {
            let warnings = detect_ats_issues(text);
            let score = calc_ats_score(&warnings);

            prop_assert!(warnings.len() <= AtsRule::ALL.len());
            prop_assert!((50..=100).contains(&score), "score {}", score);
            prop_assert_eq!(score as usize, 100 - 10 * warnings.len());

            let expected: Vec<&str> = AtsRule::ALL
                .iter()
                .filter(|rule| rule.fires(text))
                .map(|rule| rule.warning())
                .collect();
            prop_assert_eq!(&warnings, &expected);
            prop_assert_eq!(detect_ats_issues(text), warnings);
            Ok(())
        }

        proptest! {
            #[test]
            fn report_holds_for_any_string(text in any::<String>()) {
                check_report(&text)?;
            }

            #[test]
            fn report_holds_for_resume_like_text(text in resume_like()) {
                check_report(&text)?;
            }

            #[test]
            fn image_scan_tolerates_any_char_at_the_cut(
                pad in 480usize..520,
                c in any::<char>(),
                tail in any::<String>(),
            ) {
                let text = format!("{}{c}{tail}", "x".repeat(pad));
                check_report(&text)?;
            }
        }
    }
}
