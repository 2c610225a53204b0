//! Storage seam used by [`TaskService`](crate::service::TaskService).

use anyhow::Error;
use projectbot_core::Task;
use projectbot_store_json::{JsonFileStore, JsonStoreError};

/// Minimal wholesale storage abstraction required by the service.
pub trait TaskPersistence {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Load every stored task in order. An absent document is an empty list.
    ///
    /// # Errors
    /// Returns a store-specific error when the document cannot be read.
    fn load_all(&self) -> Result<Vec<Task>, Self::Error>;

    /// Replace the stored document with `tasks`.
    ///
    /// # Errors
    /// Returns a store-specific error when writing fails.
    fn save_all(&self, tasks: &[Task]) -> Result<(), Self::Error>;
}

impl TaskPersistence for JsonFileStore {
    type Error = JsonStoreError;

    fn load_all(&self) -> Result<Vec<Task>, Self::Error> {
        Self::load_all(self)
    }

    fn save_all(&self, tasks: &[Task]) -> Result<(), Self::Error> {
        Self::save_all(self, tasks)
    }
}

impl<S> TaskPersistence for &S
where
    S: TaskPersistence + ?Sized,
{
    type Error = S::Error;

    fn load_all(&self) -> Result<Vec<Task>, Self::Error> {
        (*self).load_all()
    }

    fn save_all(&self, tasks: &[Task]) -> Result<(), Self::Error> {
        (*self).save_all(tasks)
    }
}
