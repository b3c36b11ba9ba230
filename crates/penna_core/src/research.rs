//! Research records produced at the start of a cycle.

use serde::{Deserialize, Serialize};

/// One researched query and the insights generated for it.
///
/// Ephemeral: produced during the research stage and consumed immediately
/// by topic selection, never persisted.
///
/// # Examples
///
/// ```
/// use penna_core::ResearchResult;
///
/// let result = ResearchResult {
///     query: "AI agents in production".to_string(),
///     insights: "Most deployments fail at the evaluation stage.".to_string(),
/// };
/// assert!(result.insights.contains("evaluation"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    /// The research query that was asked
    pub query: String,
    /// Generated insights for the query
    pub insights: String,
}
