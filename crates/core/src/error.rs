use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output")]
    Write(#[source] std::io::Error),
}

impl CatError {
    /// Returns the underlying I/O error regardless of the stage that failed.
    #[must_use]
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => source,
            Self::Write(source) => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatError>;
