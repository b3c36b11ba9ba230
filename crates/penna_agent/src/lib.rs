//! Cycle orchestration for the Penna content agent.
//!
//! This crate sequences one full content cycle: research the configured
//! topic pool, select a novel topic against recent history, generate
//! short-form and long-form content under hard character budgets, back the
//! artifacts up locally, publish them, and append to history. Every stage
//! is independently fallible; a failure is logged and the pipeline
//! continues with whatever partial result is available. Only an empty
//! research stage aborts a cycle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backup;
mod config;
mod cycle;
mod generator;
mod history;
mod prompts;
mod research;
mod topic;

pub use backup::BackupWriter;
pub use config::{
    AgentConfig, AgentSettings, ApiSettings, ContentGuidelines, Credentials, ResearchSettings,
};
pub use cycle::{CycleOrchestrator, CycleReport};
pub use generator::ContentGenerator;
pub use history::{HISTORY_CAP, HistoryStore};
pub use research::Researcher;
pub use topic::{TopicSelection, TopicSelector};
