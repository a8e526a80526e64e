//! Blacklist management module
//!
//! Holds the set of extremely common passwords the scorer penalizes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_FORGE_BLACKLIST_PATH";

/// Passwords that are always blacklisted.
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "1234", "qwerty", "12345", "dragon", "baseball", "football",
    "letmein", "monkey", "abc123", "111111", "mustang", "access", "shadow", "master", "michael",
    "superman", "696969",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Blacklist {
    /// The built-in list of common passwords.
    pub fn builtin() -> Self {
        Self {
            entries: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// A blacklist with no entries at all.
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Returns the blacklist file path from [`BLACKLIST_PATH_ENV`], if set.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var_os(BLACKLIST_PATH_ENV).map(PathBuf::from)
    }

    /// Loads the blacklist configured through the environment.
    ///
    /// Without `PWD_FORGE_BLACKLIST_PATH` this is the built-in list;
    /// otherwise it behaves like [`Blacklist::from_path`].
    pub fn from_env() -> Result<Self, BlacklistError> {
        match Self::path_from_env() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Loads the built-in list extended with one password per line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: FileNotFound {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: Empty file {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        let mut blacklist = Self::builtin();
        blacklist.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist initialized: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    /// Adds entries, trimmed and lowercased; blank ones are skipped.
    pub fn extend<I, S>(&mut self, passwords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.extend(
            passwords
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty()),
        );
    }

    /// Returns `true` if the password is blacklisted (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
