mod args;

pub use args::Args;
use clap::Parser;

use crate::config::RunConfig;

/// Parses the process arguments into a [`RunConfig`].
///
/// Usage errors, `--help` included, exit the process through clap.
#[must_use]
pub fn load_config() -> RunConfig {
    RunConfig::from(Args::parse())
}
