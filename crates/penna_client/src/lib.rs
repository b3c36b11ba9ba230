//! Chat-completion client for the Penna content agent.
//!
//! This crate provides the [`CompletionDriver`] trait that the agent crates
//! are generic over, plus [`CompletionClient`], the reqwest-based
//! implementation for an OpenAI-shaped chat-completions endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod driver;

pub use client::CompletionClient;
pub use driver::CompletionDriver;
