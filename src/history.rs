//! Generation history
//!
//! The history is owned by the caller and handed to the engine as a
//! [`HistorySink`]. It lives for the process lifetime and is only written to
//! disk through an explicit export.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::{sync::mpsc, task::JoinHandle};

use crate::generator::GeneratedPassword;
use crate::report::{StrengthReport, StrengthTier};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to write history: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A generated password together with its report.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub password: GeneratedPassword,
    pub report: StrengthReport,
    pub generated_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn new(password: GeneratedPassword, report: StrengthReport) -> Self {
        Self {
            password,
            report,
            generated_at: Utc::now(),
        }
    }
}

/// Export layout of one history entry.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRecord<'a> {
    password: &'a str,
    score: u8,
    tier: StrengthTier,
    generated_at: DateTime<Utc>,
    kind: &'static str,
}

impl<'a> From<&'a HistoryEntry> for ExportRecord<'a> {
    fn from(entry: &'a HistoryEntry) -> Self {
        Self {
            password: entry.password.secret().expose_secret(),
            score: entry.report.score,
            tier: entry.report.tier,
            generated_at: entry.generated_at,
            kind: entry.password.policy().kind(),
        }
    }
}

/// Receiver of generated passwords.
pub trait HistorySink {
    fn record(&mut self, entry: HistoryEntry);
}

/// Append-only, ordered record of the passwords generated so far.
#[derive(Debug, Default)]
pub struct GenerationHistory {
    entries: Vec<HistoryEntry>,
}

impl GenerationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in generation order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries per tier; tiers without entries are omitted.
    pub fn tier_counts(&self) -> BTreeMap<StrengthTier, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.report.tier).or_insert(0) += 1;
        }
        counts
    }

    /// Writes the history as a JSON array of
    /// `{password, score, tier, generatedAt, kind}` objects.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), HistoryError> {
        let records: Vec<ExportRecord<'_>> = self.entries.iter().map(ExportRecord::from).collect();
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Exported {} history entries as JSON", records.len());

        Ok(())
    }

    /// Writes one JSON object per line.
    pub fn write_json_lines<W: Write>(&self, mut writer: W) -> Result<(), HistoryError> {
        for entry in &self.entries {
            serde_json::to_writer(&mut writer, &ExportRecord::from(entry))?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Exported {} history entries as JSON lines", self.entries.len());

        Ok(())
    }
}

impl HistorySink for GenerationHistory {
    fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
}

/// Cloneable sender feeding a history owned by a recorder task.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct HistoryHandle {
    tx: mpsc::UnboundedSender<HistoryEntry>,
}

#[cfg(feature = "async")]
impl HistoryHandle {
    /// True once the recorder task has stopped; later entries are dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[cfg(feature = "async")]
impl HistorySink for HistoryHandle {
    fn record(&mut self, entry: HistoryEntry) {
        if let Err(_e) = self.tx.send(entry) {
            #[cfg(feature = "tracing")]
            tracing::warn!("History recorder stopped, entry dropped: {}", _e);
        }
    }
}

/// Spawns a task that owns a [`GenerationHistory`] and records every entry
/// sent through the returned handle (or its clones).
///
/// The task finishes and yields the history once all handles are dropped.
/// Must be called from within a tokio runtime.
#[cfg(feature = "async")]
pub fn spawn_recorder() -> (HistoryHandle, JoinHandle<GenerationHistory>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<HistoryEntry>();

    let task = tokio::spawn(async move {
        let mut history = GenerationHistory::new();
        while let Some(entry) = rx.recv().await {
            history.record(entry);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("History recorder finished with {} entries", history.len());

        history
    });

    (HistoryHandle { tx }, task)
}
