//! Assembly of the output line from a source value and candidates.
//!
//! The assembler reads the source value once, then runs every candidate
//! through a fixed pipeline:
//!
//! 1. expand `$NAME` references, dropping the candidate if any is undefined;
//! 2. if enabled, drop it unless it names an existing directory;
//! 3. unless duplicates are allowed, drop it if the *original* source value
//!    already contains it;
//! 4. emit it, preceded by a separator if anything is already on the line.
//!
//! With [`Position::Back`] the source is emitted before the candidates,
//! with [`Position::Front`] after them. An empty source or an empty set of
//! admitted candidates never leaves a stray separator.
//!
//! Values are handled as OS strings throughout, so bytes that are not
//! valid UTF-8 reach the output unchanged.

use std::ffi::{OsStr, OsString};
use std::io;

use crate::config::{Config, Position};
use crate::env::Environment;
use crate::error::Result;
use crate::interpolate::interpolate;
use crate::os;
use crate::path::{format_path, write_path, PathList};
use crate::probe::DirectoryProbe;

/// Why a candidate was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A `$NAME` reference named an undefined variable.
    UndefinedVariable,
    /// The existence check found no directory.
    NotADirectory,
    /// The source value already contains the element.
    Duplicate,
}

impl Rejection {
    /// Returns a human-readable description of this rejection.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UndefinedVariable => "references an undefined variable",
            Self::NotADirectory => "is not an existing directory",
            Self::Duplicate => "is already present",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A candidate that did not make it into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// The candidate as given, before expansion.
    pub candidate: OsString,
    /// Why it was dropped.
    pub reason: Rejection,
}

/// The result of one assembly run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// The output line, without a trailing newline.
    pub line: OsString,
    /// Admitted candidates after expansion, in emission order.
    pub admitted: Vec<OsString>,
    /// Dropped candidates, in command-line order.
    pub rejected: Vec<Rejected>,
    /// True if a required variable was unset and candidates were skipped.
    pub quick_exit: bool,
}

impl Assembly {
    /// Write the line and a newline to `out`, byte for byte.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` rejects the write.
    pub fn write_line<W: io::Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        out.write_all(os::bytes(&self.line))?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Builds the output line for one invocation.
///
/// # Examples
///
/// ```
/// use addpath::assemble::Assembler;
/// use addpath::config::{ConfigBuilder, Position};
/// use addpath::env::MapEnvironment;
/// use addpath::probe::FilesystemProbe;
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_delimiter(':')
///     .with_position(Position::Front)
///     .build();
/// let env = MapEnvironment::new();
/// let assembler = Assembler::new(&config, &env, &FilesystemProbe);
///
/// let assembly = assembler.assemble("/a:/b", &["/c"]);
/// # if !cfg!(windows) {
/// assert_eq!(assembly.line, "/c:/a:/b");
/// # }
/// ```
pub struct Assembler<'a> {
    config: &'a Config,
    env: &'a dyn Environment,
    probe: &'a dyn DirectoryProbe,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over a frozen configuration.
    #[must_use]
    pub fn new(
        config: &'a Config,
        env: &'a dyn Environment,
        probe: &'a dyn DirectoryProbe,
    ) -> Self {
        Self { config, env, probe }
    }

    /// Read the source value. An undefined variable reads as empty.
    #[must_use]
    pub fn source(&self) -> OsString {
        self.env
            .var(&self.config.source_variable)
            .unwrap_or_default()
    }

    /// Returns true if every required variable is defined.
    #[must_use]
    pub fn requirements_met(&self) -> bool {
        self.config
            .required_variables
            .iter()
            .all(|name| self.env.is_defined(name))
    }

    /// The source value through the formatter alone, with no candidates
    /// and no source-form wrapping.
    #[must_use]
    pub fn passthrough(&self, source: &OsStr) -> OsString {
        format_path(source, &self.config.format)
    }

    /// Read the source value and assemble the output for `candidates`.
    ///
    /// If a required variable is unset the source is passed through
    /// unchanged and `quick_exit` is set.
    pub fn run<S: AsRef<OsStr>>(&self, candidates: &[S]) -> Assembly {
        let source = self.source();

        if !self.requirements_met() {
            log::debug!("required variable unset; passing source through");
            return Assembly {
                line: self.passthrough(&source),
                quick_exit: true,
                ..Assembly::default()
            };
        }

        self.assemble(&source, candidates)
    }

    /// Assemble the output for an explicit source value.
    pub fn assemble<P, S>(&self, source: &P, candidates: &[S]) -> Assembly
    where
        P: AsRef<OsStr> + ?Sized,
        S: AsRef<OsStr>,
    {
        let format = &self.config.format;
        let source_list = PathList::new(source, format.delimiter);
        let source = source_list.as_bytes();
        let mut separator = [0; 4];
        let separator = format.separator.encode_utf8(&mut separator).as_bytes();

        let mut assembly = Assembly::default();
        let mut body = Vec::with_capacity(source.len());
        let mut emitted = false;

        if self.config.policy.position == Position::Back {
            write_path(&mut body, source, format);
            emitted = !source.is_empty();
        }

        for candidate in candidates {
            let candidate = candidate.as_ref();
            match self.admit(&source_list, candidate) {
                Ok(element) => {
                    if emitted {
                        body.extend_from_slice(separator);
                    }
                    write_path(&mut body, os::bytes(&element), format);
                    emitted = true;
                    assembly.admitted.push(element);
                }
                Err(reason) => {
                    log::debug!("dropping '{}': {reason}", candidate.to_string_lossy());
                    assembly.rejected.push(Rejected {
                        candidate: candidate.to_os_string(),
                        reason,
                    });
                }
            }
        }

        if self.config.policy.position == Position::Front {
            if emitted && !source.is_empty() {
                body.extend_from_slice(separator);
            }
            write_path(&mut body, source, format);
        }

        let body = os::from_bytes(body);
        assembly.line = if self.config.source_form {
            format.dialect.wrap(&self.config.source_variable, &body)
        } else {
            body
        };

        assembly
    }

    fn admit(&self, source: &PathList<'_>, candidate: &OsStr) -> std::result::Result<OsString, Rejection> {
        let element = interpolate(candidate, self.env)
            .into_value()
            .ok_or(Rejection::UndefinedVariable)?;

        if self.config.policy.check_existence && !self.probe.is_dir(&element) {
            return Err(Rejection::NotADirectory);
        }

        if !self.config.policy.allow_duplicates && source.contains(&element) {
            return Err(Rejection::Duplicate);
        }

        Ok(element)
    }
}
