use std::io::Write;

use tracing::debug;

use crate::error::{CatError, Result};
use crate::source::Source;

/// Width of the right-aligned line number column.
pub const NUMBER_WIDTH: usize = 6;

/// Formats one numbered output line: the counter right-aligned in a
/// [`NUMBER_WIDTH`] column, two spaces, then the line as read.
#[must_use]
pub fn format_numbered(counter: u64, line: &str) -> String {
    format!("{counter:>NUMBER_WIDTH$}  {line}")
}

/// Concatenates sources to a single sink, optionally numbering lines.
///
/// The counter starts at zero and runs continuously across all sources.
#[derive(Debug)]
pub struct Catter {
    sources: Vec<Source>,
    show_numbers: bool,
}

impl Catter {
    #[must_use]
    pub fn new(sources: Vec<Source>, show_numbers: bool) -> Self {
        Self {
            sources,
            show_numbers,
        }
    }

    /// Writes every source, in order, to `out`.
    ///
    /// # Errors
    ///
    /// The first read or write failure aborts the run. Output written before
    /// the failure is left in place and later sources are never touched.
    pub fn run<W: Write + ?Sized>(self, out: &mut W) -> Result<()> {
        let mut counter: u64 = 0;
        let mut line = String::new();

        for mut source in self.sources {
            debug!("catting {}", source.name());
            while source.read_line(&mut line)? > 0 {
                if self.show_numbers {
                    out.write_all(format_numbered(counter, &line).as_bytes())
                        .map_err(CatError::Write)?;
                    counter += 1;
                } else {
                    out.write_all(line.as_bytes()).map_err(CatError::Write)?;
                }
            }
        }

        out.flush().map_err(CatError::Write)
    }
}
