//! Wire types for the chat-completions endpoint.
//!
//! The upstream API takes an OpenAI-shaped request body and returns its
//! choices array; only the first choice is ever consumed.

use serde::{Deserialize, Serialize};

/// One conversation message in a completion request.
///
/// # Examples
///
/// ```
/// use penna_core::ChatMessage;
///
/// let msg = ChatMessage::user("Suggest one article topic.");
/// assert_eq!(msg.role, "user");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("user" or "assistant")
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for a chat completion.
///
/// # Examples
///
/// ```
/// use penna_core::{ChatMessage, ChatRequest};
///
/// let request = ChatRequest {
///     model: "sonar".to_string(),
///     messages: vec![ChatMessage::user("Hello!")],
///     max_tokens: 100,
///     temperature: 0.7,
/// };
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["messages"][0]["role"], "user");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages (a single user message for Penna's calls)
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature in [0, 1]
    pub temperature: f32,
}

/// One choice in a completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

/// Response body from a chat completion.
///
/// # Examples
///
/// ```
/// use penna_core::ChatResponse;
///
/// let response: ChatResponse = serde_json::from_str(
///     r#"{"choices":[{"message":{"role":"assistant","content":"A topic"}}]}"#,
/// ).unwrap();
/// assert_eq!(response.content(), Some("A topic"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated choices; only the first is consumed
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Text of the first choice, if present.
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}
