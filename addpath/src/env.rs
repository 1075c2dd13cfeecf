//! Environment variable lookup.
//!
//! Every read of the process environment goes through the [`Environment`]
//! trait so the assembly driver and interpolator can run against a fixed
//! map in tests. Names and values are OS strings and are never decoded.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

use crate::os;

/// Source of environment variable values.
pub trait Environment {
    /// Look up a variable by name, returning `None` when it is undefined.
    fn var(&self, name: &OsStr) -> Option<OsString>;

    /// Returns true if the variable is defined (even if empty).
    fn is_defined(&self, name: &OsStr) -> bool {
        self.var(name).is_some()
    }
}

/// Returns true if `name` could ever be defined in a process environment.
///
/// Empty names and names containing `=` or NUL are never defined.
#[must_use]
pub fn is_valid_name(name: &OsStr) -> bool {
    let name = os::bytes(name);
    !name.is_empty() && !name.contains(&b'=') && !name.contains(&0)
}

/// The real process environment.
///
/// An invalid name reads as undefined rather than failing.
///
/// # Examples
///
/// ```
/// use addpath::env::{Environment, ProcessEnvironment};
///
/// let env = ProcessEnvironment;
/// assert!(env.var("".as_ref()).is_none());
/// assert!(env.var("A=B".as_ref()).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &OsStr) -> Option<OsString> {
        if !is_valid_name(name) {
            return None;
        }
        env::var_os(name)
    }
}

/// A fixed set of variables held in memory.
///
/// # Examples
///
/// ```
/// use addpath::env::{Environment, MapEnvironment};
///
/// let env = MapEnvironment::new().with("FOO", "bar");
/// assert_eq!(env.var("FOO".as_ref()).unwrap(), "bar");
/// assert!(env.var("BAR".as_ref()).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<OsString, OsString>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, returning the updated environment.
    #[must_use]
    pub fn with(mut self, name: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.set(name, value);
        self
    }

    /// Defines or replaces a variable.
    pub fn set(&mut self, name: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &OsStr) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
