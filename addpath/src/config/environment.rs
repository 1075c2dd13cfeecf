//! Environment variable handling for configuration defaults.
//!
//! This module reads `SHELL` to pick the default dialect and the
//! `ADDPATH_*` variables that override built-in defaults. Command-line
//! flags always take precedence over anything read here. A value that
//! cannot be parsed is ignored, as if the variable were unset.

use std::ffi::OsStr;

use crate::env::Environment;
use crate::output::Dialect;

/// Selects the default dialect when no flag names one.
pub const DIALECT_VAR: &str = "ADDPATH_DIALECT";
/// Allows duplicates by default.
pub const ALLOW_DUPLICATES_VAR: &str = "ADDPATH_ALLOW_DUPLICATES";
/// Enables the existence check by default.
pub const CHECK_EXISTS_VAR: &str = "ADDPATH_CHECK_EXISTS";

/// Values read from `ADDPATH_*` variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentOverrides {
    /// From `ADDPATH_DIALECT`.
    pub dialect: Option<Dialect>,
    /// From `ADDPATH_ALLOW_DUPLICATES`.
    pub allow_duplicates: Option<bool>,
    /// From `ADDPATH_CHECK_EXISTS`.
    pub check_existence: Option<bool>,
}

/// Reads configuration defaults from the environment.
///
/// # Examples
///
/// ```
/// use addpath::config::EnvironmentConfig;
/// use addpath::env::MapEnvironment;
/// use addpath::output::Dialect;
///
/// let env = MapEnvironment::new().with("ADDPATH_DIALECT", "csh");
/// assert_eq!(EnvironmentConfig::overrides(&env).dialect, Some(Dialect::CShell));
///
/// let env = MapEnvironment::new().with("ADDPATH_DIALECT", "fish");
/// assert_eq!(EnvironmentConfig::overrides(&env).dialect, None);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Dialect implied by `SHELL` alone.
    #[must_use]
    pub fn shell_dialect(env: &dyn Environment) -> Dialect {
        Dialect::detect(env.var(OsStr::new("SHELL")).as_deref())
    }

    /// Read all `ADDPATH_*` overrides, skipping malformed values.
    #[must_use]
    pub fn overrides(env: &dyn Environment) -> EnvironmentOverrides {
        EnvironmentOverrides {
            dialect: Self::read(env, DIALECT_VAR, |val| Dialect::from_string(val).ok()),
            allow_duplicates: Self::read(env, ALLOW_DUPLICATES_VAR, Self::parse_bool),
            check_existence: Self::read(env, CHECK_EXISTS_VAR, Self::parse_bool),
        }
    }

    fn read<T>(env: &dyn Environment, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        let raw = env.var(OsStr::new(name))?;
        let parsed = raw.to_str().and_then(parse);
        if parsed.is_none() {
            log::debug!("ignoring {name}='{}'", raw.to_string_lossy());
        }
        parsed
    }

    fn parse_bool(s: &str) -> Option<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}
