//! Penna: autonomous content generation and publishing agent.
//!
//! Facade crate re-exporting the workspace surface: domain types and text
//! algorithms from `penna_core`, error types from `penna_error`, the
//! completion driver from `penna_client`, publishing targets from
//! `penna_publish`, and the cycle pipeline from `penna_agent`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod telemetry;

pub use penna_agent::{
    AgentConfig, AgentSettings, ApiSettings, BackupWriter, ContentGenerator, ContentGuidelines,
    Credentials, CycleOrchestrator, CycleReport, HISTORY_CAP, HistoryStore, Researcher,
    ResearchSettings, TopicSelection, TopicSelector,
};
pub use penna_client::{CompletionClient, CompletionDriver};
pub use penna_core::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, GeneratedContent, HistoryEntry, Platform,
    PlatformLimits, ResearchResult, clean_title, trim_to_limit,
};
pub use penna_error::{
    CompletionError, CompletionErrorKind, ConfigError, PennaError, PennaErrorKind, PennaResult,
    PublishError, PublishErrorKind, StorageError, StorageErrorKind,
};
pub use penna_publish::{LinkedInPublisher, MediumPublisher, PublishDispatcher, PublishTarget};
