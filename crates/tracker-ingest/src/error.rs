//! Error types for source ingestion.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort reading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("the file '{path}' was not found")]
    FileNotFound { path: PathBuf },

    /// Input file exists but cannot be opened.
    #[error("permission denied accessing '{path}'")]
    PermissionDenied { path: PathBuf },

    /// Any other failure to read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === CSV Errors ===
    /// Header row missing or unreadable.
    #[error("could not read header row of {path}: {message}")]
    CsvHeader { path: PathBuf, message: String },
}

impl IngestError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::FileRead { path, source },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
