//! Library exports for addpath-cli.
//!
//! The binary is a thin wrapper over these modules; they are public so the
//! benchmarks and integration tests can drive a run without spawning a
//! process.

pub mod args;
pub mod cli;
pub mod error;
pub mod run;

pub use cli::Cli;
pub use error::CliError;
pub use run::run;
