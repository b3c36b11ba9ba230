//! Topic selection against recent history.

use crate::prompts;
use penna_client::CompletionDriver;
use penna_core::ResearchResult;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const TOPIC_MAX_TOKENS: u32 = 100;
const TOPIC_TEMPERATURE: f32 = 0.8;

/// Canned topics used when the upstream is unavailable.
///
/// The fallback guarantees cycle continuity: topic selection always yields
/// a usable topic, even when every completion call fails.
const FALLBACK_TOPICS: [&str; 4] = [
    "Why I Stopped Trusting AI Blindly (And What Changed)",
    "The $50K Mistake That Taught Me About AI Implementation",
    "3 AI Tools That Actually Save Me 10 Hours a Week",
    "What Nobody Tells You About Building AI Products",
];

/// Outcome of topic selection.
///
/// An explicit sum type rather than silent catch-and-substitute, so the
/// orchestrator must handle the fallback branch and can log which path ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicSelection {
    /// Topic generated from this cycle's research
    Generated(String),
    /// Canned topic substituted after an upstream failure
    Fallback(String),
}

impl TopicSelection {
    /// The selected topic string, whichever branch produced it.
    pub fn topic(&self) -> &str {
        match self {
            Self::Generated(topic) | Self::Fallback(topic) => topic,
        }
    }

    /// Whether the fallback branch ran.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Combines research snippets into one novel topic string.
///
/// Novelty is best-effort: the prompt instructs avoidance of the recent
/// topics but nothing verifies the result, so downstream must tolerate
/// occasional repeats.
pub struct TopicSelector<D> {
    driver: Arc<D>,
}

impl<D: CompletionDriver> TopicSelector<D> {
    /// Creates a new topic selector.
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }

    /// Select one topic from the cycle's research, avoiding recent topics.
    #[instrument(skip(self, research, recent_topics), fields(research_count = research.len()))]
    pub async fn select_topic(
        &self,
        research: &[ResearchResult],
        recent_topics: &[String],
    ) -> TopicSelection {
        let prompt = prompts::topic_prompt(research, recent_topics);

        match self
            .driver
            .complete(&prompt, TOPIC_MAX_TOKENS, TOPIC_TEMPERATURE)
            .await
        {
            Ok(raw) => {
                let topic = strip_quotes(&raw);
                info!(topic = %topic, "Generated topic");
                TopicSelection::Generated(topic)
            }
            Err(e) => {
                warn!(error = %e, "Topic generation failed, using fallback topic");
                let mut rng = rand::thread_rng();
                let topic = FALLBACK_TOPICS
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(FALLBACK_TOPICS[0]);
                TopicSelection::Fallback(topic.to_string())
            }
        }
    }
}

/// Strip surrounding whitespace and quote characters from a raw topic.
fn strip_quotes(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim()
        .to_string()
}
