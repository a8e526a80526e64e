//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::blacklist::Blacklist;
use crate::report::StrengthReport;
use crate::sections::{estimate_entropy, Candidate, Finding, SECTIONS};

/// Length at which the length contribution stops growing.
pub const DEFAULT_LENGTH_CEILING: usize = 16;

/// Scores passwords against a blacklist and a length ceiling.
///
/// Scoring is a pure function of the password and these two settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthScorer {
    blacklist: Blacklist,
    length_ceiling: usize,
}

impl Default for StrengthScorer {
    fn default() -> Self {
        Self {
            blacklist: Blacklist::builtin(),
            length_ceiling: DEFAULT_LENGTH_CEILING,
        }
    }
}

impl StrengthScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    /// Sets the length ceiling; values below 1 are treated as 1.
    pub fn with_length_ceiling(mut self, ceiling: usize) -> Self {
        self.length_ceiling = ceiling.max(1);
        self
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn length_ceiling(&self) -> usize {
        self.length_ceiling
    }

    /// Evaluates password strength and returns a detailed report.
    pub fn score(&self, password: &SecretString) -> StrengthReport {
        self.score_exposed(password.expose_secret())
    }

    pub(crate) fn score_exposed(&self, pwd: &str) -> StrengthReport {
        let candidate = Candidate::new(pwd, &self.blacklist, self.length_ceiling);

        let mut total: i32 = 0;
        let mut findings: Vec<Finding> = Vec::new();

        // Orchestrator: execute sections in sequence
        for (_section_name, section_fn) in SECTIONS {
            let result = section_fn(&candidate);

            #[cfg(feature = "tracing")]
            tracing::trace!(
                section = _section_name,
                points = result.points,
                findings = result.findings.len(),
                "section evaluated"
            );

            total += result.points;
            findings.extend(result.findings);
        }

        // Stable: equal gains keep section order.
        findings.sort_by(|a, b| b.gain.cmp(&a.gain));

        let score = total.clamp(0, 100) as u8;
        let report = StrengthReport::new(
            score,
            estimate_entropy(pwd),
            findings.into_iter().map(|f| f.suggestion).collect(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = candidate.chars.len(),
            score = report.score,
            tier = %report.tier,
            "password scored"
        );

        report
    }
}

/// Scores a password with the built-in blacklist and default ceiling.
pub fn score_strength(password: &SecretString) -> StrengthReport {
    StrengthScorer::default().score(password)
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn score_strength_tx(
    scorer: &StrengthScorer,
    password: &SecretString,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let report = scorer.score(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StrengthTier;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn score(s: &str) -> StrengthReport {
        score_strength(&secret(s))
    }

    #[test]
    fn test_score_empty_password() {
        let report = score("");
        assert_eq!(report.score, 0);
        assert_eq!(report.tier, StrengthTier::VeryWeak);
        assert!(!report.suggestions.is_empty());
        // Length is the biggest missing contribution.
        assert!(report.suggestions[0].contains("longer"));
    }

    #[test]
    fn test_score_repeated_chars() {
        let report = score("aaaa");
        assert_eq!(report.tier, StrengthTier::VeryWeak);
        assert!(report.suggestions.iter().any(|s| s.contains("repeated")));
    }

    #[test]
    fn test_score_common_password() {
        let report = score("password");
        assert!(report.score < 20, "got {}", report.score);
        assert_eq!(report.tier, StrengthTier::VeryWeak);
        assert!(report.suggestions[0].contains("common"));
    }

    #[test]
    fn test_score_medium_password() {
        let report = score("MyPass123!");
        assert_eq!(report.score, 80);
        assert_eq!(report.tier, StrengthTier::Strong);
    }

    #[test]
    fn test_score_very_strong_password() {
        let report = score("Vx9!rT2#mQ7&kL4$");
        assert_eq!(report.score, 100);
        assert_eq!(report.tier, StrengthTier::VeryStrong);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_score_is_deterministic() {
        for pwd in ["", "a", "password", "MyPass123!", "1234zzzZ!"] {
            assert_eq!(score(pwd), score(pwd));
        }
    }

    #[test]
    fn test_score_monotonic_in_length() {
        let unit = "aB3$";
        let mut previous = 0;
        for len in 1..=48 {
            let pwd: String = unit.chars().cycle().take(len).collect();
            let report = score(&pwd);
            assert!(
                report.score >= previous,
                "score dropped from {} to {} at length {}",
                previous,
                report.score,
                len
            );
            previous = report.score;
        }
    }

    #[test]
    fn test_suggestions_ordered_by_gain() {
        // Missing: length (32 points), repetition (15), uppercase and symbols
        // (10 each), distinct characters (6).
        let report = score("abccc1");
        let first = &report.suggestions[0];
        assert!(first.contains("longer"), "got {first}");
        assert!(report.suggestions[1].contains("repeated"));
        assert!(report.suggestions[2].contains("uppercase"));
        assert!(report.suggestions[3].contains("symbols"));
    }

    #[test]
    fn test_score_bounds() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let report = score(pwd);
            assert!(report.score <= 100, "Score {} out of bounds for '{}'", report.score, pwd);
            assert_eq!(report.tier, StrengthTier::from_score(report.score));
        }
    }

    #[test]
    fn test_custom_length_ceiling() {
        let scorer = StrengthScorer::new().with_length_ceiling(8);
        let report = scorer.score(&secret("Zq8!mW3#"));
        assert_eq!(report.score, 98);
        assert!(!report.suggestions.iter().any(|s| s.contains("longer")));
    }

    #[test]
    fn test_huge_length_ceiling_does_not_panic() {
        let scorer = StrengthScorer::new().with_length_ceiling(1usize << 32);
        let report = scorer.score(&secret("abc"));
        // No length points: lowercase (10) plus three distinct characters.
        assert_eq!(report.score, 13);
        assert!(report.suggestions[0].contains("longer"));

        let report = StrengthScorer::new()
            .with_length_ceiling(usize::MAX)
            .score(&secret("Vx9!rT2#mQ7&kL4$"));
        assert_eq!(report.score, 50);
    }

    #[test]
    fn test_report_entropy() {
        assert_eq!(score("").entropy, 0.0);
        assert_eq!(score("aB3$").entropy, 37.52);
        assert!(score("Vx9!rT2#mQ7&kL4$").entropy > score("password").entropy);
    }

    #[test]
    fn test_custom_blacklist() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Tr0ub4dor&3").expect("Failed to write");
        let blacklist = Blacklist::from_path(temp_file.path()).unwrap();

        let default_report = score("Tr0ub4dor&3");
        let scorer = StrengthScorer::new().with_blacklist(blacklist);
        let report = scorer.score(&secret("Tr0ub4dor&3"));

        assert_eq!(report.score + 40, default_report.score);
        assert!(report.suggestions[0].contains("common"));
    }
}
