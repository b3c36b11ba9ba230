//! Shared mocks for agent integration tests.

use async_trait::async_trait;
use penna_client::CompletionDriver;
use penna_core::{GeneratedContent, Platform};
use penna_error::{CompletionError, CompletionErrorKind};
use penna_publish::PublishTarget;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock completions.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always fail with a transport error
    Error,
}

/// Mock completion driver.
///
/// Lets tests control responses and count calls without touching the
/// network.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockDriver {
    /// Driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Driver that always fails.
    pub fn new_error() -> Self {
        Self {
            behavior: MockBehavior::Error,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, CompletionError> {
        *self.call_count.lock().unwrap() += 1;
        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error => Err(CompletionError::new(CompletionErrorKind::Transport(
                "mock transport failure".to_string(),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Everything a mock target received, shared with the test body.
pub type Received = Arc<Mutex<Vec<GeneratedContent>>>;

/// Mock publish target that records received content and returns a fixed
/// outcome.
pub struct MockTarget {
    platform: Platform,
    outcome: bool,
    received: Received,
}

impl MockTarget {
    /// Build a target for `platform` that always reports `outcome`,
    /// returning the shared received-content log alongside it.
    pub fn new(platform: Platform, outcome: bool) -> (Self, Received) {
        let received = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                platform,
                outcome,
                received: Arc::clone(&received),
            },
            received,
        )
    }
}

#[async_trait]
impl PublishTarget for MockTarget {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn publish(&self, content: &GeneratedContent) -> bool {
        self.received.lock().unwrap().push(content.clone());
        self.outcome
    }
}
