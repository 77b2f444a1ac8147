//! # mender-error
//!
//! Fatal/transient error classification for the mender client.
//!
//! ## Design Philosophy
//!
//! - **Classification**: Decide how to handle a failure (Fatal or Transient)
//! - **Cause**: Keep the underlying error untouched for later inspection
//! - **Rendering**: `"<fatal|transient> error: <cause>"`
//!
//! This crate only tags and renders errors. Retrying is up to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use mender_error::{new_fatal_error, new_transient_error, MenderError};
//!
//! fn fetch_update(attempt: u32) -> Result<(), MenderError> {
//!     if attempt < 2 {
//!         Err(new_transient_error(anyhow::anyhow!("connection refused")))
//!     } else {
//!         Err(new_fatal_error(anyhow::anyhow!("disk full")))
//!     }
//! }
//!
//! let mut attempt = 0;
//! let err = loop {
//!     match fetch_update(attempt) {
//!         Err(err) if !err.is_fatal() => attempt += 1,
//!         Err(err) => break err,
//!         Ok(()) => unreachable!(),
//!     }
//! };
//!
//! assert_eq!(err.to_string(), "fatal error: disk full");
//! ```
//!
//! ## Principles
//!
//! - Wrap at the failure site with `new_fatal_error` / `new_transient_error`
//!   or the [`ResultExt`] adapters
//! - Branch on `is_fatal()` where the retry decision is made
//! - Errors already converted to `anyhow::Error` are inspected with [`classify`]

mod classification;
mod error;
mod ext;

pub use classification::{Classification, ParseClassificationError};
pub use error::{new_fatal_error, new_transient_error, ClassifiedError, MenderError};
pub use ext::{classify, classify_dyn, is_fatal, ResultExt};

/// Result type alias using MenderError
pub type Result<T> = std::result::Result<T, MenderError>;
