//! Core data types and text algorithms for the Penna content agent.
//!
//! This crate holds the platform-independent building blocks: the platform
//! enum and its length limits, the research/history/content records that
//! flow through a cycle, the chat-completion wire types, and the pure
//! length-control algorithms (trimming and title cleaning) that enforce
//! per-platform character budgets.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod content;
mod history;
mod platform;
mod research;
mod trim;
mod wire;

pub use content::GeneratedContent;
pub use history::HistoryEntry;
pub use platform::{Platform, PlatformLimits};
pub use research::ResearchResult;
pub use trim::{clean_title, trim_to_limit};
pub use wire::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
