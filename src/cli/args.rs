// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
///
/// `--version` is declared by hand so that it prints the bare version string.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "catter",
    about = "Concatenate FILE(s), or standard input, to standard output",
    disable_version_flag = true
)]
pub struct Args {
    /// Print the version and exit
    #[arg(long)]
    pub version: bool,

    /// Number all output lines
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Run the built-in self-check instead of concatenating
    #[arg(long)]
    pub run_tests: bool,

    /// Files to concatenate; standard input when omitted or given as `-`
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
