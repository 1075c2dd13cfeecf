//! Delimiter-separated path strings.
//!
//! This module provides the two byte-level operations the assembler needs
//! on a value such as `PATH`:
//!
//! - **Membership**: [`PathList::contains`] splits on runs of the delimiter
//!   and compares each non-empty element byte for byte with a candidate.
//! - **Formatting**: [`format_path`] re-serializes a value for an output
//!   dialect, swapping delimiters for the dialect separator and optionally
//!   turning `/` into `\`.
//!
//! # Examples
//!
//! ```
//! use addpath::output::{Dialect, FormatConfig};
//! use addpath::path::{format_path, PathList};
//!
//! let path = PathList::new("/usr/bin:/bin", ':');
//! assert!(path.contains("/bin"));
//! assert!(!path.contains("/sbin"));
//!
//! let csh = FormatConfig::for_dialect(Dialect::CShell, ':');
//! assert_eq!(format_path("/usr/bin:/bin", &csh), "/usr/bin /bin");
//! ```

mod format;
mod list;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use format::{format_path, write_path};
pub use list::{Elements, PathList};
