//! Configuration value definitions.
//!
//! Everything here is plain data. A [`Config`] is produced once by the
//! builder and then only read.

use std::ffi::OsString;

use crate::output::FormatConfig;

/// Default environment variable holding the source path.
pub const DEFAULT_SOURCE_VARIABLE: &str = "PATH";

/// Where admitted candidates go relative to the source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Before the source value.
    Front,
    /// After the source value.
    #[default]
    Back,
}

/// Rules for admitting candidate elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertionPolicy {
    /// Admit candidates already present in the source value.
    pub allow_duplicates: bool,
    /// Admit only candidates that name an existing directory.
    pub check_existence: bool,
    /// Front or back insertion.
    pub position: Position,
}

/// Complete, frozen configuration for one invocation.
///
/// # Examples
///
/// ```
/// use addpath::config::{Config, Position};
///
/// let config = Config::default();
/// assert_eq!(config.source_variable, "PATH");
/// assert_eq!(config.policy.position, Position::Back);
/// assert!(!config.source_form);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delimiter, separator and dialect settings.
    pub format: FormatConfig,

    /// Duplicate, existence and position rules.
    pub policy: InsertionPolicy,

    /// Name of the variable holding the source path.
    pub source_variable: OsString,

    /// Wrap the output in the dialect's source form.
    pub source_form: bool,

    /// Variables that must all be defined for candidates to be applied.
    pub required_variables: Vec<OsString>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: FormatConfig::default(),
            policy: InsertionPolicy::default(),
            source_variable: DEFAULT_SOURCE_VARIABLE.into(),
            source_form: false,
            required_variables: Vec::new(),
        }
    }
}
