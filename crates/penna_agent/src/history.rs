//! JSON-file-backed history of published content.

use penna_core::HistoryEntry;
use penna_error::{StorageError, StorageErrorKind};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Maximum number of history entries kept on disk.
pub const HISTORY_CAP: usize = 50;

/// Bounded, ordered store of past (timestamp, title, topic) records.
///
/// Entries are ordered oldest-first; appending beyond [`HISTORY_CAP`]
/// evicts the oldest entries FIFO. The whole file is rewritten on every
/// append, which is cheap at this size and keeps the on-disk state
/// consistent with memory. Single-writer under the one-cycle-at-a-time
/// invariant, so no locking is needed.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load history from `path`, tolerating a missing or unreadable file.
    ///
    /// A corrupt or absent history must never block a cycle, so load
    /// failures log and start fresh instead of propagating.
    #[instrument]
    pub fn load(path: impl Into<PathBuf> + std::fmt::Debug) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => {
                    info!(count = entries.len(), "Loaded content history");
                    entries
                }
                Err(e) => {
                    warn!(error = %e, "Could not parse content history, starting fresh");
                    Vec::new()
                }
            },
            Err(_) => {
                info!("No content history found, starting fresh");
                Vec::new()
            }
        };
        Self { path, entries }
    }

    /// Append an entry, evict past the cap, and persist.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.entries.push(entry);
        if self.entries.len() > HISTORY_CAP {
            let excess = self.entries.len() - HISTORY_CAP;
            self.entries.drain(..excess);
        }
        self.persist()?;
        info!(count = self.entries.len(), "Content history updated");
        Ok(())
    }

    /// Topics of the most recent `n` entries, oldest-first.
    pub fn recent_topics(&self, n: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .map(|e| e.topic.clone())
            .collect()
    }

    /// All entries, oldest-first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;

        std::fs::write(&self.path, raw).map_err(|e| {
            StorageError::new(StorageErrorKind::Io(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })
    }
}
