//! Agent configuration and credential loading.

use penna_core::{Platform, PlatformLimits};
use penna_error::{ConfigError, PennaError, PennaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the content agent.
///
/// Loaded once at startup from a TOML file and passed by value into the
/// orchestrator; there is no ambient or global configuration lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Research-stage settings
    pub research: ResearchSettings,
    /// Per-platform hard length ceilings
    #[serde(default)]
    pub limits: PlatformLimits,
    /// Agent-level settings
    pub agent: AgentSettings,
    /// Completion API settings
    pub api: ApiSettings,
    /// Content-style guidelines fed to generation prompts
    #[serde(default)]
    pub guidelines: ContentGuidelines,
}

impl AgentConfig {
    /// Load agent configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> PennaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PennaError::from(ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            )))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            PennaError::from(ConfigError::new(format!("Failed to parse config: {}", e)))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the agent cannot run on.
    pub fn validate(&self) -> PennaResult<()> {
        if self.research.topics.is_empty() {
            Err(ConfigError::new("research topic list is empty"))?;
        }
        if self.research.queries_per_cycle == 0 {
            Err(ConfigError::new("queries_per_cycle must be at least 1"))?;
        }
        if self.agent.platforms.is_empty() {
            Err(ConfigError::new("no publishing platforms enabled"))?;
        }
        Ok(())
    }

    /// Whether a platform is in the enabled set.
    pub fn platform_enabled(&self, platform: Platform) -> bool {
        self.agent.platforms.contains(&platform)
    }

    /// Path of the history file inside the content directory.
    pub fn history_path(&self) -> PathBuf {
        self.agent.content_dir.join("history.json")
    }
}

/// Research-stage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSettings {
    /// Pool of research queries to sample from
    pub topics: Vec<String>,
    /// How many queries to research per cycle
    pub queries_per_cycle: usize,
}

/// Agent-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Enabled publishing platforms
    pub platforms: Vec<Platform>,
    /// Hours between content cycles
    pub post_interval_hours: u64,
    /// Directory for history and backup artifacts
    pub content_dir: PathBuf,
}

/// Completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Model identifier sent with every request
    pub model: String,
    /// Token budget for content-generation calls
    pub max_tokens: u32,
}

/// Content-style guidelines fed into generation prompts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentGuidelines {
    /// Phrases the model is instructed never to use
    #[serde(default)]
    pub avoid_phrases: Vec<String>,
}

/// Secrets resolved from the process environment.
///
/// Only the completion API key is required; missing publisher credentials
/// leave that integration unconfigured rather than failing startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the completion API
    pub completion_api_key: String,
    /// LinkedIn OAuth token
    pub linkedin_access_token: Option<String>,
    /// LinkedIn author identity URN
    pub linkedin_person_urn: Option<String>,
    /// Medium integration token
    pub medium_integration_token: Option<String>,
}

impl Credentials {
    /// Resolve credentials from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `PERPLEXITY_API_KEY` is unset; this
    /// is the one credential the agent cannot run without.
    pub fn from_env() -> PennaResult<Self> {
        let completion_api_key = env_var("PERPLEXITY_API_KEY").ok_or_else(|| {
            PennaError::from(ConfigError::new(
                "PERPLEXITY_API_KEY environment variable required",
            ))
        })?;

        Ok(Self {
            completion_api_key,
            linkedin_access_token: env_var("LINKEDIN_ACCESS_TOKEN"),
            linkedin_person_urn: env_var("LINKEDIN_PERSON_URN"),
            medium_integration_token: env_var("MEDIUM_INTEGRATION_TOKEN"),
        })
    }

    /// Whether both LinkedIn credentials are present.
    pub fn linkedin_configured(&self) -> bool {
        self.linkedin_access_token.is_some() && self.linkedin_person_urn.is_some()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
