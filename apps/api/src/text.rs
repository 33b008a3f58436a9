//! Text helpers that follow browser-side string semantics.
//!
//! Résumé text arrives from a JavaScript client that measures lengths in
//! UTF-16 code units and trims the ECMAScript whitespace set, so limits here
//! are counted the same way.

/// Maximum length of résumé and job-description text accepted for analysis.
pub const MAX_INPUT_UNITS: usize = 4000;

/// The ECMAScript `\s` set (WhiteSpace + LineTerminator).
pub fn is_ecma_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns the longest prefix of `text` that fits in `max_units` UTF-16 code units.
/// A surrogate pair straddling the limit is dropped whole.
pub fn utf16_prefix(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (idx, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &text[..idx];
        }
    }
    text
}

/// Trims surrounding whitespace and caps the result at `max_units`.
pub fn normalize_input(raw: &str, max_units: usize) -> &str {
    utf16_prefix(raw.trim_matches(is_ecma_whitespace), max_units)
}
