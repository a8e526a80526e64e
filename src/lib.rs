//! Password generation and strength scoring library
//!
//! Generates passwords under configurable policies from the operating
//! system's secure randomness source, scores password strength, and keeps an
//! optional caller-owned history of what was generated.
//!
//! # Features
//!
//! - `async` (default): channel delivery of reports and a history recorder task
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORGE_BLACKLIST_PATH`: file of extra common passwords, one per line,
//!   read by [`Blacklist::from_env`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{GenerationHistory, PasswordEngine, PolicyConfig};
//!
//! let mut history = GenerationHistory::new();
//! let mut engine = PasswordEngine::new().with_history(&mut history);
//!
//! let policy = PolicyConfig { length: 20, ..PolicyConfig::default() };
//! let password = engine.generate(&policy).expect("valid policy");
//! let report = engine.score(password.secret());
//!
//! println!("Score: {}", report.score);
//! println!("Strength: {}", report.tier);
//! for suggestion in &report.suggestions {
//!     println!("  - {suggestion}");
//! }
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod generator;
mod history;
mod policy;
mod report;
mod sections;
mod words;

// Public API
pub use blacklist::{Blacklist, BlacklistError, BLACKLIST_PATH_ENV, COMMON_PASSWORDS};
pub use evaluator::{score_strength, StrengthScorer, DEFAULT_LENGTH_CEILING};
pub use generator::{
    GeneratedPassword, GenerationPolicy, MemorableOptions, PasswordEngine, MAX_BATCH_SIZE,
};
pub use history::{GenerationHistory, HistoryEntry, HistoryError, HistorySink};
pub use policy::{
    Alphabet, CharClass, InvalidPolicyError, PolicyConfig, StrengthLevel, AMBIGUOUS_CHARS,
    SIMILAR_CHARS,
};
pub use report::{StrengthReport, StrengthTier};
pub use words::DEFAULT_WORDS;

// Re-exported so callers can build and read secrets without a direct dependency.
pub use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
pub use evaluator::score_strength_tx;

#[cfg(feature = "async")]
pub use history::{spawn_recorder, HistoryHandle};
