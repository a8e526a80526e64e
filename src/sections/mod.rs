//! Password evaluation sections
//!
//! Each section scores a specific aspect of password strength and reports
//! what would improve it.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::{character_variety_section, distinct_chars_section, estimate_entropy};

use crate::blacklist::Blacklist;

/// Password under evaluation, plus the scorer settings sections need.
pub struct Candidate<'a> {
    pub password: &'a str,
    pub chars: Vec<char>,
    pub blacklist: &'a Blacklist,
    pub length_ceiling: usize,
}

impl<'a> Candidate<'a> {
    pub fn new(password: &'a str, blacklist: &'a Blacklist, length_ceiling: usize) -> Self {
        Self {
            password,
            chars: password.chars().collect(),
            blacklist,
            length_ceiling: length_ceiling.max(1),
        }
    }
}

/// An unmet criterion and the points fixing it would recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub gain: u32,
    pub suggestion: String,
}

impl Finding {
    pub fn new(gain: u32, suggestion: impl Into<String>) -> Self {
        Self {
            gain,
            suggestion: suggestion.into(),
        }
    }
}

/// Result of a section: its signed contribution and any findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionResult {
    pub points: i32,
    pub findings: Vec<Finding>,
}

impl SectionResult {
    pub fn points(points: i32) -> Self {
        Self {
            points,
            findings: Vec::new(),
        }
    }

    pub fn with_finding(mut self, finding: Finding) -> Self {
        self.findings.push(finding);
        self
    }
}

pub type SectionFn = fn(&Candidate<'_>) -> SectionResult;

/// Evaluation order; ties between equal-gain suggestions follow it.
pub const SECTIONS: [(&str, SectionFn); 5] = [
    ("blacklist", blacklist_section),
    ("length", length_section),
    ("variety", character_variety_section),
    ("distinct", distinct_chars_section),
    ("pattern", pattern_analysis_section),
];
