//! Medium long-form publishing.

use crate::PublishTarget;
use async_trait::async_trait;
use penna_core::{GeneratedContent, Platform};
use penna_error::{PublishError, PublishErrorKind};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info, instrument};

const DEFAULT_BASE_URL: &str = "https://api.medium.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Medium's defined success status for article creation.
const SUCCESS_STATUS: u16 = 201;

/// Default tags attached to every published article.
const DEFAULT_TAGS: [&str; 5] = [
    "artificial-intelligence",
    "ai",
    "technology",
    "machine-learning",
    "innovation",
];

/// Publishes long-form articles through the Medium API.
///
/// An absent integration token means "not configured", not an error: the
/// publish short-circuits to `false` without any network call. When
/// configured, publishing is two sequential calls: resolve the account id
/// via `/v1/me`, then submit the article as public markdown.
pub struct MediumPublisher {
    client: Client,
    integration_token: Option<String>,
    base_url: String,
}

impl MediumPublisher {
    /// Creates a new Medium publisher.
    ///
    /// # Arguments
    ///
    /// * `integration_token` - Medium integration token, or `None` when the
    ///   integration is not configured
    pub fn new(integration_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            integration_token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether an integration token is configured.
    pub fn is_configured(&self) -> bool {
        self.integration_token.is_some()
    }

    /// Resolves the account identifier for the integration token.
    async fn resolve_user_id(&self, token: &str) -> Result<String, PublishError> {
        let response = self
            .client
            .get(format!("{}/v1/me", self.base_url))
            .bearer_auth(token)
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::Upstream {
                status,
                body,
            }));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::MalformedResponse(e.to_string())))?;

        body["data"]["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                PublishError::new(PublishErrorKind::MalformedResponse(
                    "user response carried no data.id".to_string(),
                ))
            })
    }

    async fn submit(&self, token: &str, content: &GeneratedContent) -> Result<String, PublishError> {
        let user_id = self.resolve_user_id(token).await?;
        let url = format!("{}/v1/users/{}/posts", self.base_url, user_id);
        let payload = json!({
            "title": content.title,
            "contentFormat": "markdown",
            "content": content.content,
            "publishStatus": "public",
            "tags": DEFAULT_TAGS,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&payload)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Http(e.to_string())))?;

        let status = response.status().as_u16();
        if status != SUCCESS_STATUS {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::Upstream {
                status,
                body,
            }));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::MalformedResponse(e.to_string())))?;

        Ok(body["data"]["url"].as_str().unwrap_or_default().to_string())
    }
}

#[async_trait]
impl PublishTarget for MediumPublisher {
    fn platform(&self) -> Platform {
        Platform::Medium
    }

    #[instrument(skip(self, content), fields(title = %content.title))]
    async fn publish(&self, content: &GeneratedContent) -> bool {
        let Some(token) = self.integration_token.clone() else {
            info!("Medium token not configured, skipping Medium post");
            return false;
        };

        info!("Posting to Medium");
        match self.submit(&token, content).await {
            Ok(post_url) => {
                info!(url = %post_url, "Successfully posted to Medium");
                true
            }
            Err(e) => {
                error!(error = %e, "Medium publish failed");
                false
            }
        }
    }
}
