//! Main entry point for the addpath CLI.
//!
//! Prints `$PATH` (or another variable) with new elements added, in a form
//! the calling shell can assign or `eval`:
//!
//! ```sh
//! PATH=`addpath -b /opt/bin`
//! eval `addpath -s -f $HOME/bin`
//! ```

use addpath::env::ProcessEnvironment;
use addpath::probe::FilesystemProbe;
use addpath_cli::args::retain_known_flags;
use addpath_cli::{run, Cli};
use clap::{CommandFactory, Parser};
use std::io::Write;

fn main() {
    let cli = Cli::parse_from(retain_known_flags(std::env::args_os()));

    // Help wins over version wherever the flags appear.
    if cli.help {
        print_help();
        std::process::exit(1);
    }
    if cli.version {
        print_version();
        std::process::exit(0);
    }

    let logger = addpath::init_logger(cli.verbose, cli.quiet, &ProcessEnvironment);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &ProcessEnvironment, &FilesystemProbe, &logger, &mut out) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

fn print_help() {
    let mut command = Cli::command();
    let help = command.render_help();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // Nothing useful can be done if stdout is gone.
    let _ = writeln!(out, "addpath {}", env!("CARGO_PKG_VERSION"));
    let _ = write!(out, "{help}");
    let _ = out.flush();
}

fn print_version() {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "addpath {}", env!("CARGO_PKG_VERSION"));
    let _ = out.flush();
}
