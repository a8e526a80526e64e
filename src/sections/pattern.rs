//! Pattern analysis section - detects repetitive and sequential patterns.

use super::{Candidate, Finding, SectionResult};

pub const SEQUENTIAL_PENALTY: u32 = 15;
pub const REPEATED_PENALTY: u32 = 15;

/// Identical characters in a row that count as repetition.
const REPEAT_RUN: usize = 3;

/// Consecutive code points in a row that count as a sequence.
const SEQUENCE_RUN: usize = 4;

/// True when `chars` holds `REPEAT_RUN` identical characters in a row.
pub(crate) fn has_repeated_run(chars: &[char]) -> bool {
    chars
        .windows(REPEAT_RUN)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// True when `chars` holds an ascending or descending run such as
/// "abcd" or "4321". Letters are compared case-insensitively.
pub(crate) fn has_sequential_run(chars: &[char]) -> bool {
    let folded: Vec<i64> = chars
        .iter()
        .map(|c| c.to_ascii_lowercase() as i64)
        .collect();

    folded.windows(SEQUENCE_RUN).any(|w| {
        let step = w[1] - w[0];
        (step == 1 || step == -1) && w.windows(2).all(|p| p[1] - p[0] == step)
    })
}

/// Penalizes repeated characters and sequential runs, once each.
pub fn pattern_analysis_section(candidate: &Candidate<'_>) -> SectionResult {
    let mut result = SectionResult::default();

    if has_sequential_run(&candidate.chars) {
        result.points -= SEQUENTIAL_PENALTY as i32;
        result = result.with_finding(Finding::new(
            SEQUENTIAL_PENALTY,
            "Avoid sequential runs such as \"abcd\" or \"1234\"",
        ));
    }

    if has_repeated_run(&candidate.chars) {
        result.points -= REPEATED_PENALTY as i32;
        result = result.with_finding(Finding::new(
            REPEATED_PENALTY,
            "Avoid repeated characters such as \"aaa\"",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    fn evaluate(password: &str) -> SectionResult {
        let blacklist = Blacklist::empty();
        pattern_analysis_section(&Candidate::new(password, &blacklist, 16))
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let result = evaluate("aaaaBBBB1111");
        assert_eq!(result.points, -(REPEATED_PENALTY as i32));
        assert!(result.findings[0].suggestion.contains("repeated"));
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        let result = evaluate("test1234XyZ");
        assert_eq!(result.points, -(SEQUENTIAL_PENALTY as i32));
        assert!(result.findings[0].suggestion.contains("sequential"));
    }

    #[test]
    fn test_pattern_section_sequential_letters_mixed_case() {
        assert!(has_sequential_run(&"aBcD".chars().collect::<Vec<_>>()));
        assert!(has_sequential_run(&"zyxw".chars().collect::<Vec<_>>()));
    }

    #[test]
    fn test_pattern_section_alternating_is_not_sequential() {
        assert!(!has_sequential_run(&"abab".chars().collect::<Vec<_>>()));
        assert!(!has_sequential_run(&"abc".chars().collect::<Vec<_>>()));
    }

    #[test]
    fn test_pattern_section_both_patterns() {
        let result = evaluate("1234zzz");
        assert_eq!(
            result.points,
            -((SEQUENTIAL_PENALTY + REPEATED_PENALTY) as i32)
        );
        assert_eq!(result.findings.len(), 2);
    }

    #[test]
    fn test_pattern_section_strong_password() {
        let result = evaluate("RandomPass1!@Word");
        assert_eq!(result, SectionResult::default());
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert_eq!(evaluate("ab"), SectionResult::default());
        assert_eq!(evaluate(""), SectionResult::default());
    }
}
