//! Blacklist section - checks if password is in common password list.

use super::{Candidate, Finding, SectionResult};

pub const BLACKLIST_PENALTY: u32 = 40;

/// Penalizes passwords found in the candidate's blacklist.
pub fn blacklist_section(candidate: &Candidate<'_>) -> SectionResult {
    if candidate.blacklist.contains(candidate.password) {
        return SectionResult::points(-(BLACKLIST_PENALTY as i32)).with_finding(Finding::new(
            BLACKLIST_PENALTY,
            "Avoid common passwords: this one is on the list of most common passwords",
        ));
    }
    SectionResult::default()
}
