//! The classified error type for mender

use crate::Classification;
use std::fmt;

/// Capabilities shared by every classified error.
///
/// Anything implementing this trait can stand in wherever a classified error
/// is expected, including behind `&dyn ClassifiedError`. Rendering comes from
/// the `std::error::Error` supertrait.
///
/// The cause accessor is `cause_ref`: `std::error::Error` already has a
/// deprecated `cause`.
pub trait ClassifiedError: std::error::Error + Send + Sync + 'static {
    /// The wrapped cause, unchanged. `None` when no cause was given.
    fn cause_ref(&self) -> Option<&anyhow::Error>;

    /// `true` if the failure is permanent
    fn is_fatal(&self) -> bool;

    /// The classification derived from [`ClassifiedError::is_fatal`]
    fn classification(&self) -> Classification {
        Classification::from(self.is_fatal())
    }

    /// `true` if the failed operation may be retried
    fn is_retryable(&self) -> bool {
        !self.is_fatal()
    }
}

/// An underlying error tagged as fatal or transient.
///
/// The value is immutable: the cause and classification are fixed at
/// construction. Methods that change either consume `self` and return a new
/// value.
///
/// # Example
///
/// ```rust
/// use mender_error::{new_transient_error, Classification};
///
/// let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
/// let err = new_transient_error(io);
///
/// assert!(!err.is_fatal());
/// assert_eq!(err.classification(), Classification::Transient);
/// assert_eq!(err.to_string(), "transient error: connection refused");
/// ```
pub struct MenderError {
    classification: Classification,
    cause: Option<anyhow::Error>,
}

impl MenderError {
    /// Create a new error with the given classification and cause
    pub fn new(classification: Classification, cause: Option<anyhow::Error>) -> Self {
        Self {
            classification,
            cause,
        }
    }

    /// Wrap `cause` as a fatal error
    pub fn fatal(cause: impl Into<anyhow::Error>) -> Self {
        Self::new(Classification::Fatal, Some(cause.into()))
    }

    /// Wrap `cause` as a transient error
    pub fn transient(cause: impl Into<anyhow::Error>) -> Self {
        Self::new(Classification::Transient, Some(cause.into()))
    }

    /// A fatal error with no underlying cause
    pub fn fatal_without_cause() -> Self {
        Self::new(Classification::Fatal, None)
    }

    /// A transient error with no underlying cause
    pub fn transient_without_cause() -> Self {
        Self::new(Classification::Transient, None)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the wrapped cause, unchanged
    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.cause.as_ref()
    }

    /// Check if this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.classification.is_fatal()
    }

    /// Check if the failed operation may be retried
    pub fn is_retryable(&self) -> bool {
        self.classification.is_retryable()
    }

    /// Get the classification
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// The deepest error in the cause chain
    pub fn root_cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|cause| cause.root_cause())
    }

    /// Look at the cause as a concrete type
    pub fn downcast_cause_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.cause.as_ref()?.downcast_ref::<E>()
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Take the cause back out
    pub fn into_cause(self) -> Option<anyhow::Error> {
        self.cause
    }

    /// Keep the cause under a different classification.
    ///
    /// A caller that has exhausted its retries can escalate a transient error
    /// with `err.reclassify(Classification::Fatal)`.
    pub fn reclassify(self, classification: Classification) -> Self {
        Self::new(classification, self.cause)
    }
}

impl ClassifiedError for MenderError {
    fn cause_ref(&self) -> Option<&anyhow::Error> {
        self.cause.as_ref()
    }

    fn is_fatal(&self) -> bool {
        self.classification.is_fatal()
    }
}

/// Create a new fatal error
pub fn new_fatal_error(cause: impl Into<anyhow::Error>) -> MenderError {
    MenderError::fatal(cause)
}

/// Create a new transient error
pub fn new_transient_error(cause: impl Into<anyhow::Error>) -> MenderError {
    MenderError::transient(cause)
}

// =============================================================================
// Display - "<prefix>: <cause>", the cause chain joined with ": "
// =============================================================================

impl fmt::Display for MenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {:#}", self.classification.prefix(), cause),
            None => f.write_str(self.classification.prefix()),
        }
    }
}

// =============================================================================
// Debug - multi-line, one cause per line
// =============================================================================

impl fmt::Debug for MenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)?;

        if let Some(cause) = &self.cause {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Caused by:")?;
            for (i, err) in cause.chain().enumerate() {
                write!(f, "\n    {}: {}", i, err)?;
            }
        }

        Ok(())
    }
}

// Display renders the whole cause chain; `source()` must stay `None`.
impl std::error::Error for MenderError {}
