//! Publishing error types.
//!
//! Publishers expose a boolean success contract at their outer boundary;
//! these types describe the fallible steps inside that boundary so the
//! failure can be logged with enough context to diagnose.

/// Publishing error conditions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PublishErrorKind {
    /// Network-level failure talking to the platform API
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Platform API returned a non-success status
    #[display("Platform returned {}: {}", status, body)]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },
    /// A credential required by the platform is not configured
    #[display("Missing credential: {}", _0)]
    MissingCredential(String),
    /// Platform response body could not be interpreted
    #[display("Unexpected response shape: {}", _0)]
    MalformedResponse(String),
}

/// Publish error with source location tracking.
///
/// # Examples
///
/// ```
/// use penna_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::MissingCredential(
///     "LINKEDIN_ACCESS_TOKEN".into(),
/// ));
/// assert!(format!("{}", err).contains("LINKEDIN_ACCESS_TOKEN"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The kind of error that occurred
    pub kind: PublishErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PublishError {
    /// Create a new error from a kind at the current location.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PublishErrorKind {
        &self.kind
    }
}
