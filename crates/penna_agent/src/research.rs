//! Research stage: sampled queries against the completion driver.

use crate::prompts;
use penna_client::CompletionDriver;
use penna_core::ResearchResult;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

const RESEARCH_MAX_TOKENS: u32 = 1000;
const RESEARCH_TEMPERATURE: f32 = 0.7;
/// Pause between consecutive research queries, to respect upstream rate
/// limits. Pacing policy, not a correctness requirement.
const DEFAULT_PACING: Duration = Duration::from_secs(2);

/// Runs the research stage of a cycle.
///
/// Samples `queries_per_cycle` topics uniformly from the configured pool to
/// keep content diverse, and generates insights for each. A failed insight
/// call is replaced with a placeholder so one bad query never sinks the
/// stage; the stage yields zero results only when the pool itself is empty.
pub struct Researcher<D> {
    driver: Arc<D>,
    topics: Vec<String>,
    queries_per_cycle: usize,
    pacing: Duration,
}

impl<D: CompletionDriver> Researcher<D> {
    /// Creates a researcher over the given topic pool.
    pub fn new(driver: Arc<D>, topics: Vec<String>, queries_per_cycle: usize) -> Self {
        Self {
            driver,
            topics,
            queries_per_cycle,
            pacing: DEFAULT_PACING,
        }
    }

    /// Overrides the inter-query pacing delay.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Research a random sample of the topic pool.
    #[instrument(skip(self))]
    pub async fn research(&self) -> Vec<ResearchResult> {
        info!("Starting research on configured topics");

        let selected: Vec<String> = {
            let mut rng = rand::thread_rng();
            self.topics
                .choose_multiple(&mut rng, self.queries_per_cycle.min(self.topics.len()))
                .cloned()
                .collect()
        };

        let mut results = Vec::with_capacity(selected.len());
        for query in selected {
            info!(query = %query, "Researching");
            let insights = self.insights_for(&query).await;
            results.push(ResearchResult { query, insights });
            tokio::time::sleep(self.pacing).await;
        }

        info!(count = results.len(), "Research completed");
        results
    }

    async fn insights_for(&self, query: &str) -> String {
        let prompt = prompts::research_prompt(query);
        match self
            .driver
            .complete(&prompt, RESEARCH_MAX_TOKENS, RESEARCH_TEMPERATURE)
            .await
        {
            Ok(insights) => insights,
            Err(e) => {
                warn!(query = %query, error = %e, "Insight generation failed, using placeholder");
                format!("Research insights for {query} (placeholder due to error)")
            }
        }
    }
}
