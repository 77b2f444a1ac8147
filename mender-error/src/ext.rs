//! Adapters for classifying results and inspecting error chains

use crate::{Classification, MenderError};
use tracing::trace;

/// Classify the error side of a `Result`.
///
/// ```rust
/// use mender_error::ResultExt;
///
/// fn open_artifact() -> Result<(), std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "artifact.mender"))
/// }
///
/// let err = open_artifact().fatal().unwrap_err();
/// assert_eq!(err.to_string(), "fatal error: artifact.mender");
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with the given classification
    fn classified(self, classification: Classification) -> Result<T, MenderError>;

    /// Wrap the error as fatal
    fn fatal(self) -> Result<T, MenderError>;

    /// Wrap the error as transient
    fn transient(self) -> Result<T, MenderError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn classified(self, classification: Classification) -> Result<T, MenderError> {
        self.map_err(|err| MenderError::new(classification, Some(err.into())))
    }

    fn fatal(self) -> Result<T, MenderError> {
        self.classified(Classification::Fatal)
    }

    fn transient(self) -> Result<T, MenderError> {
        self.classified(Classification::Transient)
    }
}

/// Classification of the outermost [`MenderError`] in `err`'s chain.
///
/// Returns `None` when nothing in the chain was classified.
pub fn classify(err: &anyhow::Error) -> Option<Classification> {
    err.chain().find_map(classification_of)
}

/// Same as [`classify`], walking a plain `source()` chain.
pub fn classify_dyn(err: &(dyn std::error::Error + 'static)) -> Option<Classification> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(classification) = classification_of(err) {
            return Some(classification);
        }
        current = err.source();
    }
    None
}

/// `true` only if the chain carries a fatal classification.
///
/// Errors nobody classified are not considered fatal.
pub fn is_fatal(err: &anyhow::Error) -> bool {
    classify(err).is_some_and(|classification| classification.is_fatal())
}

fn classification_of(err: &(dyn std::error::Error + 'static)) -> Option<Classification> {
    let classified = err.downcast_ref::<MenderError>()?;
    trace!(
        classification = %classified.classification(),
        error = %classified,
        "found classified error in chain"
    );
    Some(classified.classification())
}
