//! Build script for addpath-cli.
//!
//! Generates the `addpath.1` man page in OUT_DIR using clap_mangen.
//!
//! The command is rebuilt here rather than imported from the crate, since
//! build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn switch(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("addpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Add elements to PATH-style environment variables")
        .long_about(
            "Print the value of PATH (or another variable) with new elements appended or \
             prepended, formatted for a Bourne shell, a C shell or the Windows command shell. \
             Elements already present are skipped unless -d is given. Unknown flags are ignored.",
        )
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(switch("bourne", 'b', "Emit a Bourne style path, e.g. 'a:b:c'"))
        .arg(switch("csh", 'c', "Emit a C shell style path, e.g. 'a b c'"))
        .arg(switch(
            "windows",
            'w',
            "Emit a Windows style path, e.g. 'a;b;c' with backslashes",
        ))
        .arg(switch(
            "duplicates",
            'd',
            "Add elements even if they are already present",
        ))
        .arg(
            Arg::new("if-set")
                .short('e')
                .long("if-set")
                .value_name("VAR")
                .help("Only add elements if VAR is defined")
                .action(ArgAction::Append),
        )
        .arg(switch("front", 'f', "Prepend elements at the front of the path"))
        .arg(
            Arg::new("path-var")
                .short('p')
                .long("path-var")
                .value_name("VAR")
                .help("Use VAR as the path instead of PATH"),
        )
        .arg(switch(
            "source",
            's',
            "Print a command that can be sourced by the shell",
        ))
        .arg(switch(
            "check-exists",
            'x',
            "Only add elements that are existing directories",
        ))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Explain dropped elements on stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress all stderr output")
                .action(ArgAction::SetTrue),
        )
        .arg(switch("help", 'h', "Print usage and exit"))
        .arg(switch("version", 'V', "Print version and exit"))
        .arg(
            Arg::new("elements")
                .value_name("ELEM")
                .help("Elements to add, in order; $NAME references are expanded")
                .num_args(0..),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("addpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
