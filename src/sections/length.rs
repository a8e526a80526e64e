//! Length section - rewards length up to a ceiling.

use super::{Candidate, Finding, SectionResult};

/// Points awarded once the length reaches the ceiling.
pub const MAX_LENGTH_POINTS: u32 = 50;

pub(crate) fn length_points(len: usize, ceiling: usize) -> u32 {
    // u128 holds any usize times MAX_LENGTH_POINTS.
    let ceiling = ceiling.max(1) as u128;
    let len = (len as u128).min(ceiling);
    (len * MAX_LENGTH_POINTS as u128 / ceiling) as u32
}

/// Scores the password length, saturating at the candidate's ceiling.
pub fn length_section(candidate: &Candidate<'_>) -> SectionResult {
    let len = candidate.chars.len();
    let earned = length_points(len, candidate.length_ceiling);
    let result = SectionResult::points(earned as i32);

    if len < candidate.length_ceiling {
        return result.with_finding(Finding::new(
            MAX_LENGTH_POINTS - earned,
            format!(
                "Make the password longer (at least {} characters)",
                candidate.length_ceiling
            ),
        ));
    }
    result
}
