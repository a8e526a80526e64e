//! Generation policies - character classes, exclusions and presets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that look alike in many fonts.
pub const SIMILAR_CHARS: &str = "il1Lo0O";

/// Characters that are awkward to read back or to type in shells: brackets,
/// quotes, slashes and punctuation.
pub const AMBIGUOUS_CHARS: &str = "{}[]()/\\'\"`~,;:.<>";

/// Raised when a request cannot produce any valid output.
///
/// Never retried: the caller has to fix the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPolicyError {
    #[error("Password length must be at least {min} characters (got {got})")]
    LengthTooShort { min: usize, got: usize },
    #[error("Password length cannot exceed {max} characters (got {got})")]
    LengthTooLong { max: usize, got: usize },
    #[error("At least one character set must be selected")]
    NoCharacterClass,
    #[error("Word count must be at least 1")]
    NoWords,
    #[error("Word list is empty")]
    EmptyWordList,
    #[error("Cannot pick {got} distinct words from a list of {max}")]
    TooManyWords { max: usize, got: usize },
    #[error("Batch size must be between 1 and {max} (got {got})")]
    BatchSize { max: usize, got: usize },
}

/// One of the four character classes a policy can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    /// Full character set of the class, before exclusions.
    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.charset().contains(c)
    }
}

/// Preset policies for quick generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Constraints for a character password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop [`SIMILAR_CHARS`] from the alphabet.
    pub exclude_similar: bool,
    /// Drop [`AMBIGUOUS_CHARS`] from the alphabet.
    pub exclude_ambiguous: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl PolicyConfig {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 100;

    /// Policy with the given length and every class enabled.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Policy enabling exactly one class.
    pub fn only(class: CharClass, length: usize) -> Self {
        Self {
            length,
            lowercase: class == CharClass::Lowercase,
            uppercase: class == CharClass::Uppercase,
            digits: class == CharClass::Digits,
            symbols: class == CharClass::Symbols,
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }

    pub fn for_level(level: StrengthLevel) -> Self {
        match level {
            StrengthLevel::Weak => Self {
                length: 8,
                uppercase: false,
                symbols: false,
                ..Self::default()
            },
            StrengthLevel::Medium => Self {
                length: 12,
                symbols: false,
                ..Self::default()
            },
            StrengthLevel::Strong => Self::with_length(16),
            StrengthLevel::VeryStrong => Self::with_length(20),
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in canonical order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|&class| self.is_enabled(class))
            .collect()
    }

    fn is_excluded(&self, c: char) -> bool {
        (self.exclude_similar && SIMILAR_CHARS.contains(c))
            || (self.exclude_ambiguous && AMBIGUOUS_CHARS.contains(c))
    }

    /// Checks the policy and builds its alphabet.
    pub fn alphabet(&self) -> Result<Alphabet, InvalidPolicyError> {
        if self.length < Self::MIN_LENGTH {
            return Err(InvalidPolicyError::LengthTooShort {
                min: Self::MIN_LENGTH,
                got: self.length,
            });
        }
        if self.length > Self::MAX_LENGTH {
            return Err(InvalidPolicyError::LengthTooLong {
                max: Self::MAX_LENGTH,
                got: self.length,
            });
        }

        let enabled = self.enabled_classes();
        if enabled.is_empty() {
            return Err(InvalidPolicyError::NoCharacterClass);
        }

        // No class is a subset of the exclusion sets, so every group keeps
        // at least one character.
        let groups: Vec<Vec<char>> = enabled
            .into_iter()
            .map(|class| {
                class
                    .charset()
                    .chars()
                    .filter(|&c| !self.is_excluded(c))
                    .collect::<Vec<char>>()
            })
            .collect();

        let all: Vec<char> = groups.iter().flatten().copied().collect();
        Ok(Alphabet { groups, all })
    }
}

/// Eligible characters for a validated policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    groups: Vec<Vec<char>>,
    all: Vec<char>,
}

impl Alphabet {
    /// Per-class character groups, each non-empty.
    pub fn groups(&self) -> &[Vec<char>] {
        &self.groups
    }

    pub fn chars(&self) -> &[char] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
