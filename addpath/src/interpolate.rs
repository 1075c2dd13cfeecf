//! `$NAME` expansion for candidate elements.
//!
//! A reference is a `$` followed by the longest run of ASCII alphanumerics
//! and underscores. `\$` produces a literal dollar sign. An undefined
//! variable marks the whole expansion as failed; the caller drops it.
//! Bytes outside references are copied unchanged, whatever their encoding.

use std::ffi::{OsStr, OsString};

use crate::env::Environment;
use crate::os;

/// Outcome of expanding a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionStatus {
    /// The input contained no `$` reference.
    NoSubstitution,
    /// Every reference resolved to a defined variable.
    Substituted,
    /// At least one reference named an undefined variable.
    Failed,
}

/// An expanded string together with how the expansion went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The expanded text. Best-effort when `status` is `Failed`.
    pub value: OsString,
    /// Whether any substitution happened, and whether it succeeded.
    pub status: ExpansionStatus,
}

impl Expansion {
    /// Returns true unless a reference failed to resolve.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.status != ExpansionStatus::Failed
    }

    /// Returns the expanded value, or `None` when it must be discarded.
    #[must_use]
    pub fn into_value(self) -> Option<OsString> {
        if self.is_usable() {
            Some(self.value)
        } else {
            None
        }
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Expand `$NAME` references in `input` using `env`.
///
/// # Examples
///
/// ```
/// use addpath::env::MapEnvironment;
/// use addpath::interpolate::{interpolate, ExpansionStatus};
///
/// let env = MapEnvironment::new().with("FOO", "bar");
///
/// let expanded = interpolate("$FOO/baz", &env);
/// assert_eq!(expanded.value, "bar/baz");
/// assert_eq!(expanded.status, ExpansionStatus::Substituted);
///
/// assert_eq!(interpolate("/usr/bin", &env).status, ExpansionStatus::NoSubstitution);
/// assert_eq!(interpolate("$MISSING/bin", &env).status, ExpansionStatus::Failed);
/// assert_eq!(interpolate(r"\$FOO", &env).value, "$FOO");
/// ```
pub fn interpolate<S: AsRef<OsStr> + ?Sized>(input: &S, env: &dyn Environment) -> Expansion {
    let input = os::bytes(input.as_ref());
    let mut value = Vec::with_capacity(input.len());
    let mut status = ExpansionStatus::NoSubstitution;
    let mut rest = input;

    while let Some((&b, tail)) = rest.split_first() {
        if let Some(after) = rest.strip_prefix(b"\\$") {
            value.push(b'$');
            rest = after;
            continue;
        }

        if b != b'$' {
            value.push(b);
            rest = tail;
            continue;
        }

        if status == ExpansionStatus::NoSubstitution {
            status = ExpansionStatus::Substituted;
        }

        let name_len = tail
            .iter()
            .position(|&ch| !is_name_byte(ch))
            .unwrap_or(tail.len());
        let (name, after_name) = tail.split_at(name_len);
        // Name bytes are ASCII.
        let name = OsStr::new(std::str::from_utf8(name).unwrap_or_default());

        match env.var(name) {
            Some(replacement) => value.extend_from_slice(os::bytes(&replacement)),
            None => {
                log::debug!(
                    "undefined variable '{}' in '{}'",
                    name.to_string_lossy(),
                    String::from_utf8_lossy(input)
                );
                status = ExpansionStatus::Failed;
            }
        }

        rest = after_name;
    }

    Expansion {
        value: os::from_bytes(value),
        status,
    }
}
