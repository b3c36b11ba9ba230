//! Errors raised by the upstream chat-completion call.

/// Completion-call error conditions.
///
/// The taxonomy mirrors the failure modes of a single HTTP round trip to
/// the completion endpoint. Retry policy belongs to the caller; none of
/// these variants trigger retries inside the client.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Network-level failure before a response was received
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Upstream exceeded the request deadline
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),
    /// Non-success response from the completion endpoint
    #[display("Upstream error {}: {}", status, body)]
    Upstream {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Raw response body text
        body: String,
    },
    /// Success status but the body did not carry a usable choice
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use penna_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::Timeout(60));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new error from a kind at the current location.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CompletionErrorKind {
        &self.kind
    }
}
