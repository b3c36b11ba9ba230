//! Top-level error wrapper types.

use crate::{CompletionError, ConfigError, PublishError, StorageError};

/// The foundation error enum covering every Penna error domain.
///
/// # Examples
///
/// ```
/// use penna_error::{ConfigError, PennaError};
///
/// let config_err = ConfigError::new("missing topic list");
/// let err: PennaError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PennaErrorKind {
    /// Completion endpoint error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// History or backup storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Penna error with kind discrimination.
///
/// # Examples
///
/// ```
/// use penna_error::{ConfigError, PennaResult};
///
/// fn might_fail() -> PennaResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Penna Error: {}", _0)]
pub struct PennaError(Box<PennaErrorKind>);

impl PennaError {
    /// Create a new error from a kind.
    pub fn new(kind: PennaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PennaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PennaErrorKind
impl<T> From<T> for PennaError
where
    T: Into<PennaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Penna operations.
///
/// # Examples
///
/// ```
/// use penna_error::{PennaResult, StorageError, StorageErrorKind};
///
/// fn write_backup() -> PennaResult<()> {
///     Err(StorageError::new(StorageErrorKind::Io("read-only".into())))?
/// }
/// ```
pub type PennaResult<T> = std::result::Result<T, PennaError>;
