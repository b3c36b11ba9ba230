//! Routing of finished content to its publishing target.

use crate::PublishTarget;
use penna_core::{GeneratedContent, Platform};
use tracing::{info, warn};

/// Routes content to the registered target for its platform.
///
/// Failures never raise past the dispatcher: an unregistered platform or a
/// failed target call is logged and reported as `false`, so one target's
/// outage cannot abort the rest of a cycle.
pub struct PublishDispatcher {
    targets: Vec<Box<dyn PublishTarget>>,
}

impl PublishDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Registers a publishing target.
    pub fn register(&mut self, target: Box<dyn PublishTarget>) {
        info!(platform = %target.platform(), "Registered publish target");
        self.targets.push(target);
    }

    /// Whether a target is registered for the platform.
    pub fn has_target(&self, platform: Platform) -> bool {
        self.targets.iter().any(|t| t.platform() == platform)
    }

    /// Submits content to the target matching its platform.
    pub async fn dispatch(&self, content: &GeneratedContent) -> bool {
        let Some(target) = self
            .targets
            .iter()
            .find(|t| t.platform() == content.platform)
        else {
            warn!(platform = %content.platform, "No publish target registered");
            return false;
        };
        target.publish(content).await
    }
}

impl Default for PublishDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
