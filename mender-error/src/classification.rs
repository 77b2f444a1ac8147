//! Error classification for mender operations

use std::fmt;
use std::str::FromStr;

/// How a failure should be treated by the caller.
///
/// Callers match on this to decide between aborting an operation and
/// retrying it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Permanent failure, the operation cannot succeed without intervention
    Fatal,

    /// Temporary failure, the operation may succeed if retried
    Transient,
}

impl Classification {
    /// Returns the classification as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Fatal => "fatal",
            Classification::Transient => "transient",
        }
    }

    /// Prefix used when rendering a classified error
    pub fn prefix(&self) -> &'static str {
        match self {
            Classification::Fatal => "fatal error",
            Classification::Transient => "transient error",
        }
    }

    /// Check if this classification is fatal
    pub fn is_fatal(&self) -> bool {
        matches!(self, Classification::Fatal)
    }

    /// Check if an operation failing with this classification may be retried
    pub fn is_retryable(&self) -> bool {
        !self.is_fatal()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for Classification {
    /// `true` maps to [`Classification::Fatal`].
    fn from(fatal: bool) -> Self {
        if fatal {
            Classification::Fatal
        } else {
            Classification::Transient
        }
    }
}

/// Returned when a string does not name a [`Classification`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error classification: {input}")]
pub struct ParseClassificationError {
    input: String,
}

impl ParseClassificationError {
    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("fatal") {
            Ok(Classification::Fatal)
        } else if trimmed.eq_ignore_ascii_case("transient") {
            Ok(Classification::Transient)
        } else {
            Err(ParseClassificationError {
                input: s.to_string(),
            })
        }
    }
}
