use std::io::Write;

use anyhow::{Context, Result};
use catter_core::Catter;
use tracing::debug;

use crate::config::{Mode, RunConfig};
use crate::self_test;

/// Executes one invocation against `out`.
///
/// # Errors
///
/// Fails when a file cannot be opened, a source cannot be read, the output
/// cannot be written, or a self-check case fails.
pub fn run<W: Write + ?Sized>(config: &RunConfig, out: &mut W) -> Result<()> {
    match config.mode {
        Mode::Version => {
            writeln!(out, "{}", crate::VERSION)?;
            out.flush()?;
        }
        Mode::SelfCheck => self_test::run(out)?,
        Mode::Concatenate => {
            let sources = config.open_sources()?;
            Catter::new(sources, config.number)
                .run(out)
                .context("concatenation aborted")?;
            debug!("done catting");
        }
    }
    Ok(())
}
