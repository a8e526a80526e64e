//! Password generation engine.
//!
//! All password material is drawn from the operating system CSPRNG
//! ([`OsRng`]).

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::evaluator::StrengthScorer;
use crate::history::{HistoryEntry, HistorySink};
use crate::policy::{Alphabet, InvalidPolicyError, PolicyConfig, StrengthLevel};
use crate::report::StrengthReport;
use crate::words::{capitalize, DEFAULT_WORDS};

/// Largest batch accepted by [`PasswordEngine::generate_batch`].
pub const MAX_BATCH_SIZE: usize = 50;

/// Options for word-based passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorableOptions {
    pub word_count: usize,
    pub separator: String,
    /// Uppercase the first letter of each word.
    pub capitalize: bool,
    /// Append a number in `0..100` as an extra segment.
    pub include_number: bool,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            include_number: true,
        }
    }
}

/// The configuration a password was generated under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationPolicy {
    Characters(PolicyConfig),
    Memorable(MemorableOptions),
}

impl GenerationPolicy {
    /// Short label used in exports: `characters` or `memorable`.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationPolicy::Characters(_) => "characters",
            GenerationPolicy::Memorable(_) => "memorable",
        }
    }
}

/// A generated password and the policy that produced it.
///
/// The password is kept in a [`SecretString`] and redacted from `Debug`.
#[derive(Debug)]
pub struct GeneratedPassword {
    password: SecretString,
    policy: GenerationPolicy,
}

impl Clone for GeneratedPassword {
    fn clone(&self) -> Self {
        Self {
            password: SecretString::new(self.password.expose_secret().to_string().into()),
            policy: self.policy.clone(),
        }
    }
}

impl GeneratedPassword {
    fn new(password: String, policy: GenerationPolicy) -> Self {
        Self {
            password: SecretString::new(password.into()),
            policy,
        }
    }

    pub fn secret(&self) -> &SecretString {
        &self.password
    }

    pub fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.password.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }
}

/// Generates passwords and scores them.
///
/// When a history sink is attached, every generated password is scored and
/// recorded in it. The engine itself holds no shared state.
pub struct PasswordEngine<'h> {
    scorer: StrengthScorer,
    words: Vec<String>,
    history: Option<&'h mut dyn HistorySink>,
}

impl Default for PasswordEngine<'_> {
    fn default() -> Self {
        Self {
            scorer: StrengthScorer::default(),
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            history: None,
        }
    }
}

impl<'h> PasswordEngine<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every generated password into `history`.
    pub fn with_history<'a>(self, history: &'a mut dyn HistorySink) -> PasswordEngine<'a> {
        PasswordEngine {
            scorer: self.scorer,
            words: self.words,
            history: Some(history),
        }
    }

    pub fn with_scorer(mut self, scorer: StrengthScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replaces the word list used by memorable passwords.
    pub fn with_word_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn scorer(&self) -> &StrengthScorer {
        &self.scorer
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Scores a password without recording anything.
    pub fn score(&self, password: &SecretString) -> StrengthReport {
        self.scorer.score(password)
    }

    /// Generates a password of exactly `policy.length` characters.
    ///
    /// Every enabled class contributes at least one character; the rest is
    /// drawn uniformly from the whole alphabet and the result is shuffled.
    pub fn generate(
        &mut self,
        policy: &PolicyConfig,
    ) -> Result<GeneratedPassword, InvalidPolicyError> {
        let alphabet = policy.alphabet()?;
        let generated = GeneratedPassword::new(
            draw_password(&alphabet, policy.length),
            GenerationPolicy::Characters(policy.clone()),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = policy.length,
            alphabet = alphabet.len(),
            "generated password"
        );

        self.record(&generated);
        Ok(generated)
    }

    /// Generates a password with one of the preset policies.
    pub fn generate_by_level(
        &mut self,
        level: StrengthLevel,
    ) -> Result<GeneratedPassword, InvalidPolicyError> {
        self.generate(&PolicyConfig::for_level(level))
    }

    /// Generates `word_count` distinct random words joined by `separator`.
    pub fn generate_memorable(
        &mut self,
        word_count: usize,
        separator: &str,
        capitalize: bool,
    ) -> Result<GeneratedPassword, InvalidPolicyError> {
        self.generate_memorable_with(&MemorableOptions {
            word_count,
            separator: separator.to_string(),
            capitalize,
            include_number: false,
        })
    }

    pub fn generate_memorable_with(
        &mut self,
        options: &MemorableOptions,
    ) -> Result<GeneratedPassword, InvalidPolicyError> {
        if options.word_count < 1 {
            return Err(InvalidPolicyError::NoWords);
        }
        if self.words.is_empty() {
            return Err(InvalidPolicyError::EmptyWordList);
        }
        if options.word_count > self.words.len() {
            return Err(InvalidPolicyError::TooManyWords {
                max: self.words.len(),
                got: options.word_count,
            });
        }

        // Distinct words, in random order.
        let mut rng = OsRng;
        let mut segments: Vec<String> = self
            .words
            .choose_multiple(&mut rng, options.word_count)
            .map(|word| {
                if options.capitalize {
                    capitalize(word)
                } else {
                    word.clone()
                }
            })
            .collect();

        if options.include_number {
            segments.push(rng.gen_range(0..100u32).to_string());
        }

        let generated = GeneratedPassword::new(
            segments.join(options.separator.as_str()),
            GenerationPolicy::Memorable(options.clone()),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            words = options.word_count,
            word_list = self.words.len(),
            "generated memorable password"
        );

        self.record(&generated);
        Ok(generated)
    }

    /// Generates `count` independent passwords under the same policy.
    ///
    /// Either every password is produced or none is: errors are raised
    /// before anything is generated or recorded.
    pub fn generate_batch(
        &mut self,
        policy: &PolicyConfig,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>, InvalidPolicyError> {
        if count < 1 || count > MAX_BATCH_SIZE {
            return Err(InvalidPolicyError::BatchSize {
                max: MAX_BATCH_SIZE,
                got: count,
            });
        }
        let alphabet = policy.alphabet()?;

        let batch: Vec<GeneratedPassword> = (0..count)
            .map(|_| {
                GeneratedPassword::new(
                    draw_password(&alphabet, policy.length),
                    GenerationPolicy::Characters(policy.clone()),
                )
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(count, length = policy.length, "generated password batch");

        for generated in &batch {
            self.record(generated);
        }
        Ok(batch)
    }

    fn record(&mut self, generated: &GeneratedPassword) {
        if let Some(history) = self.history.as_deref_mut() {
            let report = self.scorer.score(generated.secret());
            history.record(HistoryEntry::new(generated.clone(), report));
        }
    }
}

fn draw_password(alphabet: &Alphabet, length: usize) -> String {
    let mut rng = OsRng;
    let mut chars: Vec<char> = Vec::with_capacity(length);

    // One guaranteed character per class, as long as there is room.
    for group in alphabet.groups() {
        if chars.len() < length {
            if let Some(&c) = group.choose(&mut rng) {
                chars.push(c);
            }
        }
    }

    let remaining = length - chars.len();
    chars.extend(
        (0..remaining).filter_map(|_| alphabet.chars().choose(&mut rng).copied()),
    );

    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}
