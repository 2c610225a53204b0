//! Error types for JSON store operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing the task file.
#[derive(Error, Debug)]
pub enum JsonStoreError {
    /// Reading the file or creating its directory failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a valid task document.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Tasks could not be encoded.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The temporary file could not replace the target.
    #[error("failed to replace {path}: {source}")]
    Persist {
        /// Target file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}
