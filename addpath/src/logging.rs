//! Logging infrastructure for the addpath library.
//!
//! Standard output carries exactly one line, so all diagnostics go to
//! stderr, and only at the verbosity the user asked for. At the default
//! level nothing is printed for dropped candidates.

use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use crate::env::Environment;

/// Variable consulted when neither `--verbose` nor `--quiet` is given.
pub const LOG_MODE_VAR: &str = "ADDPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use addpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Print nothing to stderr.
    Quiet,
    /// Errors only.
    #[default]
    Normal,
    /// Also explain every decision made about a candidate.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger filtered by [`LogLevel`].
///
/// # Examples
///
/// ```
/// use addpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.info("not printed below Verbose");
/// assert!(!logger.enabled(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true if messages at `level` are printed.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Quiet && self.level >= level
    }

    fn render(&self, level: LogLevel, tag: &str, message: &str) -> Option<String> {
        self.enabled(level)
            .then(|| format!("addpath: {tag}: {message}"))
    }

    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        if let Some(line) = self.render(level, tag, message) {
            eprintln!("{line}");
        }
    }

    /// Logs an error message (Normal and above).
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "error", message);
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "info", message);
    }

    /// Logs a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "debug", message);
    }
}

/// Chooses the log level from CLI flags, then `ADDPATH_LOG_MODE`.
///
/// `verbose` wins over `quiet`. An unparseable `ADDPATH_LOG_MODE` is
/// ignored.
///
/// # Examples
///
/// ```
/// use addpath::env::MapEnvironment;
/// use addpath::{init_logger, LogLevel};
///
/// let env = MapEnvironment::new().with("ADDPATH_LOG_MODE", "quiet");
/// assert_eq!(init_logger(false, false, &env).level(), LogLevel::Quiet);
/// assert_eq!(init_logger(true, false, &env).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool, env: &dyn Environment) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env
        .var(OsStr::new(LOG_MODE_VAR))
        .and_then(|value| value.to_str()?.parse().ok())
        .unwrap_or_default();
    Logger::new(level)
}
