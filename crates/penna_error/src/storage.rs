//! Storage error types for history and backup persistence.

/// Storage-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create a directory
    #[display("Directory creation failed: {}", _0)]
    DirectoryCreation(String),
    /// Filesystem read/write failure
    #[display("I/O error: {}", _0)]
    Io(String),
    /// Failed to serialize a record for persistence
    #[display("Serialization error: {}", _0)]
    Serialize(String),
    /// Failed to deserialize a persisted record
    #[display("Deserialization error: {}", _0)]
    Deserialize(String),
}

/// Storage error with source location tracking.
///
/// # Examples
///
/// ```
/// use penna_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Io("disk full".into()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new error from a kind at the current location.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorageErrorKind {
        &self.kind
    }
}
