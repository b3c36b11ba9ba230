//! Content generation with post-hoc length enforcement.

use crate::prompts;
use penna_client::CompletionDriver;
use penna_core::{GeneratedContent, Platform, PlatformLimits, clean_title, trim_to_limit};
use penna_error::CompletionError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Higher temperature for more natural variation in the body text.
const CONTENT_TEMPERATURE: f32 = 0.85;

/// Produces platform-specific text honoring a hard character budget.
///
/// The target budget (ceiling minus margin) goes into the prompt as an
/// instruction, but the model's actual output length is never trusted; the
/// deterministic trimming stage runs on every result before the content
/// object is finalized.
pub struct ContentGenerator<D> {
    driver: Arc<D>,
    limits: PlatformLimits,
    avoid_phrases: Vec<String>,
    max_tokens: u32,
}

impl<D: CompletionDriver> ContentGenerator<D> {
    /// Creates a new content generator.
    pub fn new(
        driver: Arc<D>,
        limits: PlatformLimits,
        avoid_phrases: Vec<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            driver,
            limits,
            avoid_phrases,
            max_tokens,
        }
    }

    /// Generate content for a topic on one platform.
    ///
    /// # Errors
    ///
    /// Returns the completion failure unhandled; the orchestrator treats a
    /// failed generation as a skippable stage, not a fatal one.
    #[instrument(skip(self), fields(platform = %platform))]
    pub async fn generate(
        &self,
        topic: &str,
        platform: Platform,
    ) -> Result<GeneratedContent, CompletionError> {
        info!(topic = %topic, "Generating content");

        let target_length = self.limits.target_length(platform);
        let prompt = prompts::content_prompt(topic, platform, target_length, &self.avoid_phrases);
        let raw = self
            .driver
            .complete(&prompt, self.max_tokens, CONTENT_TEMPERATURE)
            .await?;

        let title = title_for(&raw, topic);
        let max_length = self.limits.max_length(platform);

        let raw_length = raw.chars().count();
        if raw_length > max_length {
            warn!(
                length = raw_length,
                max_length, "Content too long, trimming"
            );
        }
        let content = trim_to_limit(&raw, max_length);

        info!(
            length = content.chars().count(),
            max_length, "Final content length"
        );
        Ok(GeneratedContent::new(topic, title, content, platform))
    }
}

/// Extract and clean the title from generated text.
///
/// The first line is the title; when the content has no line break, or the
/// cleaned line comes out empty, the topic itself is used.
fn title_for(raw: &str, topic: &str) -> String {
    match raw.split_once('\n') {
        Some((first_line, _)) => {
            let cleaned = clean_title(first_line);
            if cleaned.is_empty() {
                topic.to_string()
            } else {
                cleaned
            }
        }
        None => topic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_becomes_cleaned_title() {
        let raw = "🚀 Why Agents Fail: A Story\n\nBody text here.";
        assert_eq!(title_for(raw, "fallback"), "Why Agents Fail: A Story");
    }

    #[test]
    fn single_line_content_uses_topic_as_title() {
        assert_eq!(title_for("no line break here", "the topic"), "the topic");
    }

    #[test]
    fn all_symbol_first_line_falls_back_to_topic() {
        assert_eq!(title_for("✨✨✨\nbody", "the topic"), "the topic");
    }
}
