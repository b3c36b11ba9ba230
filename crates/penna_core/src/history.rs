//! History records for topic deduplication.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One published-content record in the rolling history.
///
/// Immutable once written. The history collection is ordered oldest-first
/// and capped; eviction is handled by the store, not by the entry.
///
/// # Examples
///
/// ```
/// use penna_core::HistoryEntry;
///
/// let entry = HistoryEntry::new("Why Agents Fail", "agent reliability");
/// assert_eq!(entry.title, "Why Agents Fail");
/// assert!(!entry.timestamp.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO-8601 creation timestamp
    pub timestamp: String,
    /// Cleaned title of the published content
    pub title: String,
    /// Topic string the content was generated from
    pub topic: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(title: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            title: title.into(),
            topic: topic.into(),
        }
    }
}
