//! Run configuration derived from command-line arguments.

use std::path::PathBuf;

use catter_core::{Result, Source};

use crate::cli::Args;

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the version string and nothing else.
    Version,
    /// Run the built-in self-check.
    SelfCheck,
    /// Concatenate the configured files.
    Concatenate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub files: Vec<PathBuf>,
    pub number: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        // --version wins over everything else, --run-tests over normal runs.
        let mode = if args.version {
            Mode::Version
        } else if args.run_tests {
            Mode::SelfCheck
        } else {
            Mode::Concatenate
        };

        Self {
            mode,
            files: args.files,
            number: args.number,
        }
    }
}

impl RunConfig {
    /// Opens every configured file, or standard input when none are given.
    ///
    /// All files are opened up front so that an unreadable path fails the run
    /// before any output is produced.
    ///
    /// # Errors
    ///
    /// Returns the first [`catter_core::CatError::Open`] encountered.
    pub fn open_sources(&self) -> Result<Vec<Source>> {
        if self.files.is_empty() {
            return Ok(vec![Source::stdin()]);
        }
        self.files.iter().map(Source::open).collect()
    }
}
