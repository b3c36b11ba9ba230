//! The content cycle state machine.

use crate::{BackupWriter, ContentGenerator, HistoryStore, Researcher, TopicSelection, TopicSelector};
use penna_client::CompletionDriver;
use penna_core::{GeneratedContent, HistoryEntry, Platform};
use penna_publish::PublishDispatcher;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// How many recent history topics the selector is told to avoid.
const RECENT_TOPIC_WINDOW: usize = 10;
/// Pause between the two publish stages, to respect platform rate limits.
const DEFAULT_PUBLISH_PAUSE: Duration = Duration::from_secs(5);

/// Summary of one cycle's stage outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Number of research results produced
    pub research_count: usize,
    /// The topic the cycle ran on, if selection was reached
    pub topic: Option<String>,
    /// Whether the fallback topic branch ran
    pub topic_was_fallback: bool,
    /// Whether short-form content was generated
    pub short_form_generated: bool,
    /// Whether the short-form publish succeeded
    pub short_form_published: bool,
    /// Whether long-form content was generated
    pub long_form_generated: bool,
    /// Whether the long-form publish succeeded
    pub long_form_published: bool,
    /// Whether the history entry was written
    pub history_updated: bool,
    /// Whether the cycle aborted at the research stage
    pub aborted: bool,
}

/// Sequences one full content cycle with per-stage failure isolation.
///
/// Stages: research, topic selection, short-form generation with backup and
/// publish, optional long-form generation with backup and publish, history
/// update. A research stage with zero results aborts the cycle before any
/// publish or history write; every other stage failure is logged and the
/// pipeline continues with whatever partial result exists. History is
/// updated once per cycle, from the short-form result only.
///
/// `run_cycle` takes `&mut self`, so a cycle can never overlap another on
/// the same orchestrator; the scheduler's sequential awaits provide the
/// one-cycle-at-a-time discipline across time.
pub struct CycleOrchestrator<D> {
    researcher: Researcher<D>,
    selector: TopicSelector<D>,
    generator: ContentGenerator<D>,
    dispatcher: PublishDispatcher,
    backup: BackupWriter,
    history: HistoryStore,
    long_form_enabled: bool,
    publish_pause: Duration,
}

impl<D: CompletionDriver> CycleOrchestrator<D> {
    /// Creates a new orchestrator from its collaborating parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        researcher: Researcher<D>,
        selector: TopicSelector<D>,
        generator: ContentGenerator<D>,
        dispatcher: PublishDispatcher,
        backup: BackupWriter,
        history: HistoryStore,
        long_form_enabled: bool,
    ) -> Self {
        Self {
            researcher,
            selector,
            generator,
            dispatcher,
            backup,
            history,
            long_form_enabled,
            publish_pause: DEFAULT_PUBLISH_PAUSE,
        }
    }

    /// Overrides the pause between the two publish stages.
    pub fn with_publish_pause(mut self, pause: Duration) -> Self {
        self.publish_pause = pause;
        self
    }

    /// Read access to the history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Run one complete content generation and publishing cycle.
    ///
    /// Never returns an error: every failure is absorbed into the report so
    /// a transient outage cannot prevent future cycles from running.
    #[instrument(skip(self))]
    pub async fn run_cycle(&mut self) -> CycleReport {
        info!("Starting content generation cycle");
        let mut report = CycleReport::default();

        // Stage 1: research. The only stage whose failure is fatal to the
        // cycle; publishing with no research behind it is worse than
        // skipping a slot.
        let research = self.researcher.research().await;
        report.research_count = research.len();
        if research.is_empty() {
            error!("Research produced no results, skipping cycle");
            report.aborted = true;
            return report;
        }

        // Stage 2: topic selection.
        let recent = self.history.recent_topics(RECENT_TOPIC_WINDOW);
        let selection = self.selector.select_topic(&research, &recent).await;
        if let TopicSelection::Fallback(topic) = &selection {
            warn!(topic = %topic, "Cycle running on fallback topic");
        }
        report.topic_was_fallback = selection.is_fallback();
        let topic = selection.topic().to_string();
        report.topic = Some(topic.clone());

        // Stage 3: short-form content.
        let short_form = self.produce(&topic, Platform::LinkedIn).await;
        if let Some(content) = &short_form {
            report.short_form_generated = true;
            report.short_form_published = self.dispatcher.dispatch(content).await;
            if !report.short_form_published {
                warn!("Short-form publish failed (content saved locally)");
            }
        }

        tokio::time::sleep(self.publish_pause).await;

        // Stage 4: long-form content, only when enabled.
        if self.long_form_enabled {
            if let Some(content) = self.produce(&topic, Platform::Medium).await {
                report.long_form_generated = true;
                report.long_form_published = self.dispatcher.dispatch(&content).await;
                if !report.long_form_published {
                    warn!("Long-form publish failed (content saved locally)");
                }
            }
        } else {
            info!("Long-form platform not enabled, skipping");
        }

        // Stage 5: history update, from the short-form result only.
        if let Some(content) = &short_form {
            match self
                .history
                .append(HistoryEntry::new(&content.title, &content.topic))
            {
                Ok(()) => report.history_updated = true,
                Err(e) => error!(error = %e, "Failed to update content history"),
            }
        }

        info!(
            short_form_published = report.short_form_published,
            long_form_published = report.long_form_published,
            "Content cycle completed"
        );
        report
    }

    /// Generate and back up content for one platform.
    ///
    /// Both failure modes are absorbed here: a failed generation yields
    /// `None`, and a failed backup is logged while the content continues on
    /// to publishing.
    async fn produce(&self, topic: &str, platform: Platform) -> Option<GeneratedContent> {
        match self.generator.generate(topic, platform).await {
            Ok(content) => {
                if let Err(e) = self.backup.save(&content) {
                    error!(error = %e, platform = %platform, "Failed to save content locally");
                }
                Some(content)
            }
            Err(e) => {
                error!(error = %e, platform = %platform, "Content generation failed");
                None
            }
        }
    }
}
