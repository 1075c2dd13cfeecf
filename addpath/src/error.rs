//! Error types for the addpath library.
//!
//! Data-level problems (undefined variables, missing directories, duplicate
//! elements) are never errors: they only cause a candidate to be dropped.
//! The variants here cover an unrecognized dialect name and failed output.

use thiserror::Error;

/// Result type alias for operations that may fail with an addpath error.
///
/// # Examples
///
/// ```
/// use addpath::{Error, Result};
///
/// fn example_operation() -> Result<char> {
///     Ok(':')
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the addpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error was caused by a rejected setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use addpath::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "dialect".to_string(),
    ///     message: "unknown dialect 'fish'".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
