//! Error types for the Penna content agent.
//!
//! This crate provides the foundation error types used throughout the Penna
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use penna_error::{ConfigError, PennaResult};
//!
//! fn load_topics() -> PennaResult<Vec<String>> {
//!     Err(ConfigError::new("research topic list is empty"))?
//! }
//!
//! match load_topics() {
//!     Ok(topics) => println!("Loaded {} topics", topics.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod publish;
mod storage;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{PennaError, PennaErrorKind, PennaResult};
pub use publish::{PublishError, PublishErrorKind};
pub use storage::{StorageError, StorageErrorKind};
