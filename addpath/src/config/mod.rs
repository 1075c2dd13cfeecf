//! Configuration system for addpath.
//!
//! Settings arrive incrementally while arguments are parsed, so they are
//! collected in a [`ConfigBuilder`] and frozen into a [`Config`] before any
//! output is assembled. Building never fails: malformed environment
//! settings are ignored and fall back to the next source.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Builder settings (command-line flags)
//! 2. Environment variables (`ADDPATH_DIALECT`, `ADDPATH_ALLOW_DUPLICATES`,
//!    `ADDPATH_CHECK_EXISTS`)
//! 3. The dialect implied by `SHELL`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use addpath::config::ConfigBuilder;
//! use addpath::env::MapEnvironment;
//! use addpath::output::Dialect;
//!
//! let env = MapEnvironment::new().with("ADDPATH_DIALECT", "csh");
//! let config = ConfigBuilder::new()
//!     .with_source_variable("MANPATH")
//!     .build_with_env(&env);
//!
//! assert_eq!(config.format.dialect, Dialect::CShell);
//! assert_eq!(config.source_variable, "MANPATH");
//! ```

pub mod builder;
pub mod environment;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, EnvironmentOverrides};
pub use schema::{Config, InsertionPolicy, Position, DEFAULT_SOURCE_VARIABLE};
