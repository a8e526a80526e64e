//! Strength report types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete strength category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub const ALL: [StrengthTier; 5] = [
        StrengthTier::VeryWeak,
        StrengthTier::Weak,
        StrengthTier::Moderate,
        StrengthTier::Strong,
        StrengthTier::VeryStrong,
    ];

    /// Maps a score to its tier.
    ///
    /// | score | tier |
    /// |-------|------|
    /// | 0-19 | very-weak |
    /// | 20-39 | weak |
    /// | 40-59 | moderate |
    /// | 60-84 | strong |
    /// | 85-100 | very-strong |
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthTier::VeryWeak,
            20..=39 => StrengthTier::Weak,
            40..=59 => StrengthTier::Moderate,
            60..=84 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "very-weak",
            StrengthTier::Weak => "weak",
            StrengthTier::Moderate => "moderate",
            StrengthTier::Strong => "strong",
            StrengthTier::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Score in `0..=100`.
    pub score: u8,
    pub tier: StrengthTier,
    /// Rough entropy estimate: length times the square root of the size of
    /// the character classes present. Informational, the tier ignores it.
    pub entropy: f64,
    /// Improvements, largest expected gain first.
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    pub fn new(score: u8, entropy: f64, suggestions: Vec<String>) -> Self {
        let score = score.min(100);
        Self {
            score,
            tier: StrengthTier::from_score(score),
            entropy,
            suggestions,
        }
    }
}
