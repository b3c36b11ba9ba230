//! Reqwest implementation of the completion driver.

use crate::CompletionDriver;
use async_trait::async_trait;
use penna_core::{ChatMessage, ChatRequest, ChatResponse};
use penna_error::{CompletionError, CompletionErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Chat-completions API client.
///
/// Wraps a single synchronous request/response exchange with the upstream
/// endpoint: bearer auth, fixed 60s deadline, and error normalization into
/// [`CompletionErrorKind`]. No retries.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    /// Creates a new completion client against the default endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token for the completion API
    /// * `model` - Model identifier (e.g., "sonar")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new completion client");
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Overrides the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends one chat-completion request and extracts the first choice.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn send(&self, request: &ChatRequest) -> Result<String, CompletionError> {
        let endpoint = format!("{}/chat/completions", self.base_url);
        debug!(endpoint = %endpoint, "Sending completion request");

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Completion request timed out");
                    CompletionError::new(CompletionErrorKind::Timeout(REQUEST_TIMEOUT_SECS))
                } else {
                    error!(error = ?e, "Completion request failed to send");
                    CompletionError::new(CompletionErrorKind::Transport(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!(status, body = %body, "Completion endpoint returned error");
            return Err(CompletionError::new(CompletionErrorKind::Upstream {
                status,
                body,
            }));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse completion response");
            CompletionError::new(CompletionErrorKind::MalformedResponse(e.to_string()))
        })?;

        match parsed.content() {
            Some(text) => Ok(text.to_string()),
            None => Err(CompletionError::new(
                CompletionErrorKind::MalformedResponse("response carried no choices".to_string()),
            )),
        }
    }
}

#[async_trait]
impl CompletionDriver for CompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens,
            temperature,
        };
        self.send(&request).await
    }

    fn provider_name(&self) -> &'static str {
        "perplexity"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
