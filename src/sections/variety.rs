//! Character variety sections - character classes and distinct characters.

use std::collections::HashSet;

use super::{Candidate, Finding, SectionResult};
use crate::policy::CharClass;

pub const POINTS_PER_CLASS: u32 = 10;

/// Distinct characters counted towards the score.
pub const DISTINCT_CHARS_CAP: usize = 10;

/// Scores each character class present: lowercase, uppercase, digits and
/// symbols (anything not alphanumeric).
pub fn character_variety_section(candidate: &Candidate<'_>) -> SectionResult {
    let pwd = candidate.password;
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| !c.is_alphanumeric());

    let classes = [
        (has_lower, "Add lowercase letters"),
        (has_upper, "Add uppercase letters"),
        (has_digit, "Add digits"),
        (has_special, "Add symbols"),
    ];

    let present = classes.iter().filter(|(has, _)| *has).count() as u32;
    let findings = classes
        .iter()
        .filter(|(has, _)| !has)
        .map(|(_, suggestion)| Finding::new(POINTS_PER_CLASS, *suggestion))
        .collect();

    SectionResult {
        points: (present * POINTS_PER_CLASS) as i32,
        findings,
    }
}

/// Estimates entropy as `length * sqrt(charset size)`, where the charset
/// is the union of the classes present, rounded to two decimals.
pub fn estimate_entropy(password: &str) -> f64 {
    let mut charset_size = 0;
    if password.chars().any(|c| c.is_lowercase()) {
        charset_size += CharClass::Lowercase.charset().len();
    }
    if password.chars().any(|c| c.is_uppercase()) {
        charset_size += CharClass::Uppercase.charset().len();
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        charset_size += CharClass::Digits.charset().len();
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        charset_size += CharClass::Symbols.charset().len();
    }

    let entropy = password.chars().count() as f64 * (charset_size as f64).sqrt();
    (entropy * 100.0).round() / 100.0
}

/// One point per distinct character, capped at [`DISTINCT_CHARS_CAP`].
pub fn distinct_chars_section(candidate: &Candidate<'_>) -> SectionResult {
    let unique: HashSet<char> = candidate.chars.iter().copied().collect();
    let counted = unique.len().min(DISTINCT_CHARS_CAP);
    let result = SectionResult::points(counted as i32);

    if counted < DISTINCT_CHARS_CAP {
        return result.with_finding(Finding::new(
            (DISTINCT_CHARS_CAP - counted) as u32,
            "Use more distinct characters",
        ));
    }
    result
}
