//! Output dialects and the format settings derived from them.
//!
//! A [`Dialect`] decides the separator written between elements, whether
//! forward slashes become backslashes, and how a source-form line is
//! wrapped. [`FormatConfig`] freezes those choices together with the input
//! delimiter so the formatter never consults global state.

mod shell;

pub use shell::Dialect;

/// Delimiter between elements of environment values on this platform.
pub const DEFAULT_DELIMITER: char = if cfg!(windows) { ';' } else { ':' };

/// Character-level settings for re-serializing a path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Delimiter separating elements in the source value.
    pub delimiter: char,
    /// Character written in place of each delimiter.
    pub separator: char,
    /// Write `/` as `\`.
    pub translate_slashes: bool,
    /// The dialect these settings came from.
    pub dialect: Dialect,
}

impl FormatConfig {
    /// Settings for `dialect` reading values split on `delimiter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use addpath::output::{Dialect, FormatConfig};
    ///
    /// let format = FormatConfig::for_dialect(Dialect::CShell, ':');
    /// assert_eq!(format.separator, ' ');
    /// assert!(!format.translate_slashes);
    /// ```
    #[must_use]
    pub const fn for_dialect(dialect: Dialect, delimiter: char) -> Self {
        Self {
            delimiter,
            separator: dialect.separator(),
            translate_slashes: dialect.translates_slashes(),
            dialect,
        }
    }

    /// Settings that reproduce the input unchanged.
    #[must_use]
    pub const fn identity(delimiter: char) -> Self {
        Self {
            delimiter,
            separator: delimiter,
            translate_slashes: false,
            dialect: Dialect::Bourne,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::for_dialect(Dialect::detect(None), DEFAULT_DELIMITER)
    }
}
