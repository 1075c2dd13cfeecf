//! Shell dialect detection and source-form wrapping.

use std::ffi::{OsStr, OsString};

use crate::Result;

/// Output conventions understood by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Bourne-style shells: `a:b:c`, sourced as `PATH=a:b:c`.
    Bourne,
    /// C shells: `a b c`, sourced as `set path = ( a b c )`.
    CShell,
    /// Windows command shell: `a;b;c` with backslashes.
    CommandShell,
}

impl Dialect {
    /// Pick the default dialect from the value of `SHELL`.
    ///
    /// Windows builds always use [`Dialect::CommandShell`]. Elsewhere a
    /// `SHELL` longer than three characters ending in `csh` selects
    /// [`Dialect::CShell`], and anything else selects [`Dialect::Bourne`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsStr;
    ///
    /// use addpath::output::Dialect;
    ///
    /// # if !cfg!(windows) {
    /// assert_eq!(Dialect::detect(Some(OsStr::new("/bin/tcsh"))), Dialect::CShell);
    /// assert_eq!(Dialect::detect(Some(OsStr::new("/bin/bash"))), Dialect::Bourne);
    /// assert_eq!(Dialect::detect(None), Dialect::Bourne);
    /// # }
    /// ```
    #[must_use]
    pub fn detect(shell: Option<&OsStr>) -> Self {
        if cfg!(windows) {
            return Self::CommandShell;
        }

        match shell.map(OsStr::as_encoded_bytes) {
            Some(path) if path.len() > 3 && path.ends_with(b"csh") => Self::CShell,
            _ => Self::Bourne,
        }
    }

    /// Parse a dialect from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Dialect name (case-insensitive): "sh", "bourne", "bash",
    ///   "csh", "tcsh", "cshell", "cmd", "command", "windows"
    ///
    /// # Errors
    ///
    /// Returns an error if the dialect name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sh" | "bourne" | "bash" => Ok(Self::Bourne),
            "csh" | "tcsh" | "cshell" => Ok(Self::CShell),
            "cmd" | "command" | "windows" => Ok(Self::CommandShell),
            _ => Err(crate::Error::Validation {
                field: "dialect".to_string(),
                message: format!(
                    "unknown dialect '{s}': supported dialects are sh, csh, cmd"
                ),
            }),
        }
    }

    /// The character placed between elements in the output.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Bourne => ':',
            Self::CShell => ' ',
            Self::CommandShell => ';',
        }
    }

    /// Whether forward slashes are written as backslashes.
    #[must_use]
    pub const fn translates_slashes(self) -> bool {
        matches!(self, Self::CommandShell)
    }

    /// Wrap an assembled path body in this dialect's source form.
    ///
    /// The command shell has no source form; its body is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsStr;
    ///
    /// use addpath::output::Dialect;
    ///
    /// let wrap = |dialect: Dialect, body: &str| dialect.wrap(OsStr::new("PATH"), OsStr::new(body));
    /// assert_eq!(wrap(Dialect::Bourne, "/a:/b"), "PATH=/a:/b");
    /// assert_eq!(wrap(Dialect::CShell, "/a /b"), "set path = ( /a /b )");
    /// assert_eq!(wrap(Dialect::CommandShell, r"\a;\b"), r"\a;\b");
    /// ```
    #[must_use]
    pub fn wrap(self, var: &OsStr, body: &OsStr) -> OsString {
        let mut line = OsString::with_capacity(var.len() + body.len() + 16);
        match self {
            Self::Bourne => {
                line.push(var);
                line.push("=");
                line.push(body);
            }
            Self::CShell => {
                line.push("set path = ( ");
                line.push(body);
                line.push(" )");
            }
            Self::CommandShell => line.push(body),
        }
        line
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bourne => write!(f, "sh"),
            Self::CShell => write!(f, "csh"),
            Self::CommandShell => write!(f, "cmd"),
        }
    }
}
