//! Builder that freezes command-line settings into a [`Config`].

use std::ffi::OsString;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::{Config, InsertionPolicy, Position, DEFAULT_SOURCE_VARIABLE};
use crate::env::{Environment, ProcessEnvironment};
use crate::output::{Dialect, FormatConfig, DEFAULT_DELIMITER};

/// Collects settings and produces an immutable [`Config`].
///
/// Settings given to the builder win over `ADDPATH_*` variables, which win
/// over the dialect implied by `SHELL` and the built-in defaults.
///
/// # Examples
///
/// ```
/// use addpath::config::{ConfigBuilder, Position};
/// use addpath::output::Dialect;
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_dialect(Dialect::CShell)
///     .with_dialect(Dialect::Bourne)
///     .with_position(Position::Front)
///     .build();
///
/// assert_eq!(config.format.dialect, Dialect::Bourne);
/// assert_eq!(config.policy.position, Position::Front);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    dialect: Option<Dialect>,
    delimiter: char,
    allow_duplicates: Option<bool>,
    check_existence: Option<bool>,
    position: Position,
    source_variable: Option<OsString>,
    source_form: bool,
    required_variables: Vec<OsString>,
    skip_env: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Create a builder with platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dialect: None,
            delimiter: DEFAULT_DELIMITER,
            allow_duplicates: None,
            check_existence: None,
            position: Position::default(),
            source_variable: None,
            source_form: false,
            required_variables: Vec::new(),
            skip_env: false,
        }
    }

    /// Ignore `SHELL` and `ADDPATH_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Select the output dialect. A later call replaces an earlier one.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Override the delimiter the source value is split on.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Admit candidates already present in the source value.
    #[must_use]
    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = Some(allow);
        self
    }

    /// Admit only candidates naming an existing directory.
    #[must_use]
    pub fn with_check_existence(mut self, check: bool) -> Self {
        self.check_existence = Some(check);
        self
    }

    /// Insert candidates at the front or back.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Read the source path from `name` instead of `PATH`.
    #[must_use]
    pub fn with_source_variable(mut self, name: impl Into<OsString>) -> Self {
        self.source_variable = Some(name.into());
        self
    }

    /// Wrap the output in the dialect's source form.
    #[must_use]
    pub fn with_source_form(mut self, source_form: bool) -> Self {
        self.source_form = source_form;
        self
    }

    /// Only apply candidates when `name` is defined.
    ///
    /// A name that can never be defined, such as `""` or `A=B`, makes the
    /// invocation a quick exit.
    #[must_use]
    pub fn require_variable(mut self, name: impl Into<OsString>) -> Self {
        self.required_variables.push(name.into());
        self
    }

    /// Build against the process environment.
    #[must_use]
    pub fn build(self) -> Config {
        self.build_with_env(&ProcessEnvironment)
    }

    /// Build against an explicit environment.
    ///
    /// Malformed `ADDPATH_*` values are skipped, so this never fails.
    #[must_use]
    pub fn build_with_env(self, env: &dyn Environment) -> Config {
        let (overrides, shell_dialect) = if self.skip_env {
            Default::default()
        } else {
            (
                EnvironmentConfig::overrides(env),
                Some(EnvironmentConfig::shell_dialect(env)),
            )
        };

        let dialect = self
            .dialect
            .or(overrides.dialect)
            .or(shell_dialect)
            .unwrap_or_else(|| Dialect::detect(None));

        Config {
            format: FormatConfig::for_dialect(dialect, self.delimiter),
            policy: InsertionPolicy {
                allow_duplicates: self
                    .allow_duplicates
                    .or(overrides.allow_duplicates)
                    .unwrap_or(false),
                check_existence: self
                    .check_existence
                    .or(overrides.check_existence)
                    .unwrap_or(false),
                position: self.position,
            },
            source_variable: self
                .source_variable
                .unwrap_or_else(|| DEFAULT_SOURCE_VARIABLE.into()),
            source_form: self.source_form,
            required_variables: self.required_variables,
        }
    }
}
