//! Answer normalization for grading.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for answer comparison.
///
/// Trims surrounding whitespace, lowercases, applies compatibility
/// decomposition and drops combining diacritical marks, so `"Café "` and
/// `"cafe"` compare equal.
pub fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

/// Whether a submitted value matches the expected answer.
///
/// Empty submissions never match, even against an empty answer.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    let submitted = normalize(submitted);
    !submitted.is_empty() && submitted == normalize(expected)
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
