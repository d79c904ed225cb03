//! Error types for SQL output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing SQL files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Rows per statement must be positive.
    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    /// The output file or its directory could not be created.
    #[error("cannot create '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an open output failed.
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to a caller-supplied sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

impl OutputError {
    /// Attach `path` to an I/O error from a file-backed writer.
    pub(crate) fn at(path: impl Into<PathBuf>) -> impl FnOnce(OutputError) -> OutputError {
        let path = path.into();
        move |error| match error {
            OutputError::Io(source) => OutputError::Write { path, source },
            other => other,
        }
    }
}
