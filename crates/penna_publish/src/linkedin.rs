//! LinkedIn short-form publishing.

use crate::PublishTarget;
use async_trait::async_trait;
use penna_core::{GeneratedContent, Platform, trim_to_limit};
use penna_error::{PublishError, PublishErrorKind};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

const DEFAULT_BASE_URL: &str = "https://api.linkedin.com";
const REQUEST_TIMEOUT_SECS: u64 = 30;
/// LinkedIn's defined success status for ugcPosts.
const SUCCESS_STATUS: u16 = 201;

/// Publishes short-form posts through the LinkedIn ugcPosts API.
///
/// Re-validates the hard length ceiling with an emergency trim just before
/// submission, as defense in depth against any drift upstream of the
/// dispatcher. Success is exactly HTTP 201; every other outcome is logged
/// with the response body and reported as a failed publish.
pub struct LinkedInPublisher {
    client: Client,
    access_token: String,
    person_urn: String,
    max_length: usize,
    base_url: String,
}

impl LinkedInPublisher {
    /// Creates a new LinkedIn publisher.
    ///
    /// # Arguments
    ///
    /// * `access_token` - OAuth bearer token
    /// * `person_urn` - Author identity URN (e.g., "urn:li:person:...")
    /// * `max_length` - Hard character ceiling for a post
    pub fn new(
        access_token: impl Into<String>,
        person_urn: impl Into<String>,
        max_length: usize,
    ) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
            person_urn: person_urn.into(),
            max_length,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Applies the emergency trim if the text drifted over the ceiling.
    fn enforce_limit(&self, text: &str) -> String {
        if text.chars().count() <= self.max_length {
            return text.to_string();
        }
        warn!(
            length = text.chars().count(),
            max_length = self.max_length,
            "Post exceeds ceiling at publish time, applying emergency trim"
        );
        trim_to_limit(text, self.max_length)
    }

    async fn submit(&self, text: &str) -> Result<(), PublishError> {
        let url = format!("{}/v2/ugcPosts", self.base_url);
        let payload = json!({
            "author": self.person_urn,
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": {
                        "text": text
                    },
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": {
                "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
            }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
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
        Ok(())
    }
}

#[async_trait]
impl PublishTarget for LinkedInPublisher {
    fn platform(&self) -> Platform {
        Platform::LinkedIn
    }

    #[instrument(skip(self, content), fields(title = %content.title))]
    async fn publish(&self, content: &GeneratedContent) -> bool {
        let text = self.enforce_limit(&content.content);
        let preview: String = text.chars().take(150).collect();
        info!(
            length = text.chars().count(),
            preview = %preview,
            "Posting to LinkedIn"
        );

        match self.submit(&text).await {
            Ok(()) => {
                info!("Successfully posted to LinkedIn");
                true
            }
            Err(e) => {
                error!(error = %e, "LinkedIn publish failed");
                false
            }
        }
    }
}
