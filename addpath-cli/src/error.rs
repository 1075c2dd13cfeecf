//! CLI-specific error types with exit codes.
//!
//! Data-level problems never reach this type: the library drops offending
//! candidates silently and malformed settings are ignored. What remains
//! is failed writes to stdout.

use addpath::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Writing the result failed.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success, including the `-e` quick exit and `--version`
    /// - 1: Help was requested (not an error)
    /// - 2: Rejected setting, or arguments clap could not parse
    /// - 5: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(LibError::Validation { .. }) => 2,
            CliError::Library(LibError::Io(_)) | CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
