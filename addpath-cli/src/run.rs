//! Execution of a parsed command line.

use crate::cli::Cli;
use crate::error::CliError;
use addpath::env::Environment;
use addpath::probe::DirectoryProbe;
use addpath::{Assembler, Logger};
use std::io::Write;

/// Build the configuration, assemble the path and write it as one line.
///
/// The line is written byte for byte, so values that are not valid UTF-8
/// come out as they went in.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run(
    cli: &Cli,
    env: &dyn Environment,
    probe: &dyn DirectoryProbe,
    logger: &Logger,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = cli.config_builder().build_with_env(env);
    logger.debug(&format!(
        "dialect {}, reading {}",
        config.format.dialect,
        config.source_variable.to_string_lossy()
    ));

    let assembly = Assembler::new(&config, env, probe).run(&cli.elements);

    if assembly.quick_exit {
        let unset: Vec<_> = config
            .required_variables
            .iter()
            .filter(|name| !env.is_defined(name))
            .map(|name| name.to_string_lossy())
            .collect();
        logger.info(&format!(
            "not modifying {}: {} not set",
            config.source_variable.to_string_lossy(),
            unset.join(", ")
        ));
    }

    for rejected in &assembly.rejected {
        logger.info(&format!(
            "skipping '{}': {}",
            rejected.candidate.to_string_lossy(),
            rejected.reason
        ));
    }

    assembly.write_line(out)?;
    out.flush()?;
    Ok(())
}
