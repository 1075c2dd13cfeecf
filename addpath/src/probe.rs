//! Directory existence checks for candidate elements.

use std::ffi::OsStr;
use std::fs;

/// Answers whether a candidate names a directory.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryProbe {
    /// Returns true iff `candidate` is a directory right now.
    ///
    /// Any failure to query the filesystem counts as "not a directory".
    fn is_dir(&self, candidate: &OsStr) -> bool;
}

/// Queries the real filesystem, following symlinks.
///
/// # Examples
///
/// ```
/// use addpath::probe::{DirectoryProbe, FilesystemProbe};
///
/// let probe = FilesystemProbe;
/// assert!(probe.is_dir(env!("CARGO_MANIFEST_DIR").as_ref()));
/// assert!(!probe.is_dir("/definitely/not/here".as_ref()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemProbe;

impl DirectoryProbe for FilesystemProbe {
    fn is_dir(&self, candidate: &OsStr) -> bool {
        if candidate.is_empty() {
            return false;
        }
        match fs::metadata(candidate) {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                log::debug!("cannot stat '{}': {err}", candidate.to_string_lossy());
                false
            }
        }
    }
}
