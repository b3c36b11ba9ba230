//! Trait definition for completion backends.

use async_trait::async_trait;
use penna_error::CompletionError;

/// Core trait that completion backends implement.
///
/// This is the single seam between the agent pipeline and the upstream
/// model API, which keeps the pipeline testable with mock drivers. A call
/// is one request, one response; retry policy belongs to the caller.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate a completion for a single-prompt exchange.
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CompletionError>;

    /// Provider name (e.g., "perplexity").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "sonar").
    fn model_name(&self) -> &str;
}
