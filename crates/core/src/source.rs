//! Readable line sources.
//!
//! A [`Source`] is consumed exactly once, front to back. Files are opened
//! eagerly so that an unreadable path fails before anything is written.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CatError, Result};

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Path spelling that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A named, line-oriented text stream.
pub struct Source {
    name: String,
    reader: Box<dyn BufRead>,
}

impl Source {
    /// Standard input.
    ///
    /// The stdin lock is taken per read, never held by the source.
    #[must_use]
    pub fn stdin() -> Self {
        Self::from_reader(STDIN_NAME, BufReader::new(io::stdin()))
    }

    /// Opens `path` for reading. `-` selects standard input.
    ///
    /// # Errors
    ///
    /// Returns [`CatError::Open`] if the file cannot be opened or is a
    /// directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_PATH {
            return Ok(Self::stdin());
        }

        let open_error = |source| CatError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_error)?;
        // Directories open fine on Unix and only fail at the first read.
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::new(
                io::ErrorKind::IsADirectory,
                "Is a directory",
            )));
        }
        Ok(Self::from_reader(
            path.display().to_string(),
            BufReader::new(file),
        ))
    }

    /// Wraps an arbitrary buffered reader.
    pub fn from_reader(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the next line into `buf`, keeping its trailing `\n` if present.
    ///
    /// Returns the number of bytes read, `0` once the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`CatError::Read`] on I/O failure or invalid UTF-8.
    pub fn read_line(&mut self, buf: &mut String) -> Result<usize> {
        buf.clear();
        self.reader
            .read_line(buf)
            .map_err(|source| CatError::Read {
                name: self.name.clone(),
                source,
            })
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish_non_exhaustive()
    }
}
