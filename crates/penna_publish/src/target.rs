//! Trait definition for publishing targets.

use async_trait::async_trait;
use penna_core::{GeneratedContent, Platform};

/// A platform that finished content can be published to.
///
/// Implementations must never panic or propagate errors: a failed publish
/// is reported as `false` and logged inside the implementation. Repeated
/// calls may create duplicate posts; no dedup key is sent.
#[async_trait]
pub trait PublishTarget: Send + Sync {
    /// The platform this target publishes to.
    fn platform(&self) -> Platform;

    /// Submit content, returning true only on the platform's defined
    /// success status.
    async fn publish(&self, content: &GeneratedContent) -> bool;
}
