//! Finalized generated content.

use crate::Platform;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A finished piece of content, ready for backup and publishing.
///
/// Invariant: `character_count` equals the char length of `content`, and
/// trimming has already been applied by the generator, so the count never
/// exceeds the platform ceiling. The object is never mutated after
/// construction.
///
/// # Examples
///
/// ```
/// use penna_core::{GeneratedContent, Platform};
///
/// let content = GeneratedContent::new(
///     "agent reliability",
///     "Why Agents Fail",
///     "Last week our agent fell over. Here's what we learned.",
///     Platform::LinkedIn,
/// );
/// assert_eq!(content.character_count, content.content.chars().count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Topic the content was generated from
    pub topic: String,
    /// Cleaned title (first line of the generated text, or the topic)
    pub title: String,
    /// Full text body, already trimmed to the platform ceiling
    pub content: String,
    /// Target platform
    pub platform: Platform,
    /// ISO-8601 generation timestamp
    pub generated_at: String,
    /// Character count of `content`
    pub character_count: usize,
}

impl GeneratedContent {
    /// Create a finalized content object stamped with the current time.
    ///
    /// The character count is derived from the body, never supplied.
    pub fn new(
        topic: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        platform: Platform,
    ) -> Self {
        let content = content.into();
        let character_count = content.chars().count();
        Self {
            topic: topic.into(),
            title: title.into(),
            content,
            platform,
            generated_at: Local::now().to_rfc3339(),
            character_count,
        }
    }
}
