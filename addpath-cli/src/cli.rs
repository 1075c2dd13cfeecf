//! CLI structure and flag definitions.
//!
//! The short flags follow the classic `addpath` option string
//! (`bcdfe:hp:swVx`); every flag also has a long spelling.

use std::ffi::OsString;

use addpath::{ConfigBuilder, Dialect, Position};
use clap::Parser;

/// Add elements to PATH-style environment variables.
#[derive(Parser, Debug, Default)]
#[command(name = "addpath")]
#[command(
    version,
    about = "Add elements to PATH-style environment variables",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Emit a Bourne style path, e.g. 'a:b:c'
    #[arg(short = 'b', long = "bourne", overrides_with_all = ["csh", "windows"])]
    pub bourne: bool,

    /// Emit a C shell style path, e.g. 'a b c'
    #[arg(short = 'c', long = "csh", overrides_with_all = ["bourne", "windows"])]
    pub csh: bool,

    /// Emit a Windows style path, e.g. 'a;b;c' with backslashes
    #[arg(short = 'w', long = "windows", overrides_with_all = ["bourne", "csh"])]
    pub windows: bool,

    /// Add elements even if they are already present
    #[arg(short = 'd', long = "duplicates")]
    pub duplicates: bool,

    /// Only add elements if VAR is defined
    #[arg(short = 'e', long = "if-set", value_name = "VAR")]
    pub if_set: Vec<OsString>,

    /// Prepend elements at the front of the path
    #[arg(short = 'f', long = "front")]
    pub front: bool,

    /// Use VAR as the path instead of PATH
    #[arg(short = 'p', long = "path-var", value_name = "VAR")]
    pub path_var: Option<OsString>,

    /// Print a command that can be sourced by the shell
    #[arg(short = 's', long = "source")]
    pub source: bool,

    /// Only add elements that are existing directories
    #[arg(short = 'x', long = "check-exists")]
    pub check_exists: bool,

    /// Explain dropped elements on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Suppress all stderr output
    #[arg(long)]
    pub quiet: bool,

    /// Print usage and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print version and exit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// Elements to add, in order; $NAME references are expanded
    #[arg(value_name = "ELEM")]
    pub elements: Vec<OsString>,
}

impl Cli {
    /// The dialect selected by the last dialect flag, if any.
    #[must_use]
    pub fn dialect(&self) -> Option<Dialect> {
        if self.bourne {
            Some(Dialect::Bourne)
        } else if self.csh {
            Some(Dialect::CShell)
        } else if self.windows {
            Some(Dialect::CommandShell)
        } else {
            None
        }
    }

    /// Translate the parsed flags into a configuration builder.
    #[must_use]
    pub fn config_builder(&self) -> ConfigBuilder {
        let mut builder = ConfigBuilder::new()
            .with_source_form(self.source)
            .with_position(if self.front {
                Position::Front
            } else {
                Position::Back
            });

        if let Some(dialect) = self.dialect() {
            builder = builder.with_dialect(dialect);
        }
        if self.duplicates {
            builder = builder.with_allow_duplicates(true);
        }
        if self.check_exists {
            builder = builder.with_check_existence(true);
        }
        if let Some(ref name) = self.path_var {
            builder = builder.with_source_variable(name.clone());
        }
        for name in &self.if_set {
            builder = builder.require_variable(name.clone());
        }

        builder
    }
}
