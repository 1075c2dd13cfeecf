#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # addpath
//!
//! A library for adding elements to `PATH`-style environment values.
//!
//! Given a delimiter-separated value and a list of candidate elements, the
//! [`Assembler`] expands `$NAME` references in each candidate, optionally
//! drops candidates that are not existing directories or that the value
//! already contains, and prints the result for a Bourne shell, a C shell or
//! the Windows command shell.
//!
//! ## Core Types
//!
//! - [`Assembler`] and [`Assembly`]: Output assembly for one invocation
//! - [`Config`] and [`ConfigBuilder`]: Frozen settings and their builder
//! - [`PathList`] and [`format_path`]: Membership and re-serialization
//! - [`Dialect`] and [`FormatConfig`]: Output conventions
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use addpath::env::MapEnvironment;
//! use addpath::probe::FilesystemProbe;
//! use addpath::{Assembler, ConfigBuilder, Dialect};
//!
//! let config = ConfigBuilder::new()
//!     .skip_env()
//!     .with_delimiter(':')
//!     .with_dialect(Dialect::Bourne)
//!     .build();
//! let env = MapEnvironment::new()
//!     .with("PATH", "/usr/bin:/bin")
//!     .with("HOME", "/home/me");
//!
//! let assembly = Assembler::new(&config, &env, &FilesystemProbe)
//!     .run(&["/bin", "$HOME/bin"]);
//! assert_eq!(assembly.line, "/usr/bin:/bin:/home/me/bin");
//! ```

pub mod assemble;
pub mod config;
pub mod env;
pub mod error;
pub mod interpolate;
pub mod logging;
mod os;
pub mod output;
pub mod path;
pub mod probe;

// Re-export key types at crate root for convenience
pub use assemble::{Assembler, Assembly, Rejected, Rejection};
pub use config::{Config, ConfigBuilder, InsertionPolicy, Position};
pub use error::{Error, Result};
pub use interpolate::{interpolate, Expansion, ExpansionStatus};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{Dialect, FormatConfig};
pub use path::{format_path, PathList};
