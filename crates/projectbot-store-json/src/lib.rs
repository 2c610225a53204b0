//! JSON file storage for projectbot task lists.
//!
//! The whole list lives in one pretty-printed JSON array. Every save rewrites
//! the document through a temporary file that is renamed over the target.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use projectbot_core::Task;
use tempfile::NamedTempFile;
use tracing::debug;

pub mod error;

pub use error::JsonStoreError;

/// Task list stored as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the task file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every task in stored order.
    ///
    /// A missing or blank file yields an empty list.
    ///
    /// # Errors
    /// Returns [`JsonStoreError::Io`] when the file cannot be read and
    /// [`JsonStoreError::Parse`] when it is not a valid task document, including
    /// unknown priority/status values and malformed due dates.
    pub fn load_all(&self) -> Result<Vec<Task>, JsonStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "task file missing; starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(JsonStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&contents).map_err(|source| JsonStoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Replace the stored document with `tasks`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    /// Returns an error when encoding, writing, or the final rename fails. The
    /// previous document is left intact in that case.
    pub fn save_all(&self, tasks: &[Task]) -> Result<(), JsonStoreError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|source| JsonStoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut body = serde_json::to_vec_pretty(tasks)?;
        body.push(b'\n');

        let io_err = |source| JsonStoreError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&body).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|err| JsonStoreError::Persist {
            path: self.path.clone(),
            source: err.error,
        })?;

        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}
