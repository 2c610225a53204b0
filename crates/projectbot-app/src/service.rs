use anyhow::Error;
use projectbot_core::{
    CreateTaskError, LookupError, NewTask, Reminders, Summary, Task, TaskList, reminders,
};
use time::Date;
use tracing::{info, warn};

use crate::persistence::TaskPersistence;

/// Service façade that owns the session's task list and persists every mutation.
pub struct TaskService<P> {
    tasks: TaskList,
    persistence: P,
}

impl<P> TaskService<P> {
    /// Wrap an already loaded task list.
    pub const fn new(persistence: P, tasks: TaskList) -> Self {
        Self { tasks, persistence }
    }

    /// Borrow the in-memory task list.
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }
}

impl<P: TaskPersistence> TaskService<P> {
    /// Load the stored tasks once.
    ///
    /// When the document cannot be read the session starts with an empty list
    /// and the load error is handed back so the caller can report it.
    pub fn open(persistence: P) -> (Self, Option<TaskServiceError>) {
        match persistence.load_all() {
            Ok(tasks) => {
                info!(count = tasks.len(), "loaded tasks");
                (Self::new(persistence, TaskList::from(tasks)), None)
            }
            Err(err) => {
                let err = Self::store_error(err);
                warn!(error = %err, "failed to load tasks; starting with an empty list");
                (Self::new(persistence, TaskList::new()), Some(err))
            }
        }
    }

    /// Validate and append a task, then save.
    ///
    /// # Errors
    /// [`TaskServiceError::Create`] leaves the list untouched.
    /// [`TaskServiceError::Store`] means the task was added in memory but could
    /// not be written.
    pub fn add(&mut self, input: NewTask<'_>) -> Result<Task, TaskServiceError> {
        let task = self.tasks.create(input)?.clone();
        info!(name = %task.name, due = %task.due, "task added");
        self.save()?;
        Ok(task)
    }

    /// Mark the task at `position` completed, then save.
    ///
    /// # Errors
    /// [`TaskServiceError::Lookup`] for an invalid position, or
    /// [`TaskServiceError::Store`] when saving fails.
    pub fn complete(&mut self, position: usize) -> Result<Task, TaskServiceError> {
        let task = self.tasks.complete(position)?.clone();
        info!(position, name = %task.name, "task completed");
        self.save()?;
        Ok(task)
    }

    /// Remove the task at `position`, then save.
    ///
    /// # Errors
    /// [`TaskServiceError::Lookup`] for an invalid position, or
    /// [`TaskServiceError::Store`] when saving fails.
    pub fn delete(&mut self, position: usize) -> Result<Task, TaskServiceError> {
        let task = self.tasks.delete(position)?;
        info!(position, name = %task.name, "task deleted");
        self.save()?;
        Ok(task)
    }

    /// Pending tasks due on `today`, with positions.
    pub fn due_today(&self, today: Date) -> Vec<(usize, &Task)> {
        self.tasks.due_today(today)
    }

    /// Pending tasks due before `today`.
    pub fn overdue(&self, today: Date) -> Vec<&Task> {
        self.tasks.overdue(today)
    }

    /// Counts relative to `today`.
    pub fn summary(&self, today: Date) -> Summary {
        self.tasks.summary(today)
    }

    /// Overdue and due-today reminders relative to `today`.
    pub fn reminders(&self, today: Date) -> Reminders<'_> {
        reminders(self.tasks.as_slice(), today)
    }

    fn save(&self) -> Result<(), TaskServiceError> {
        self.persistence
            .save_all(self.tasks.as_slice())
            .map_err(Self::store_error)
    }

    fn store_error(err: P::Error) -> TaskServiceError {
        TaskServiceError::Store(err.into())
    }
}

/// Errors surfaced by [`TaskService`].
#[derive(thiserror::Error, Debug)]
pub enum TaskServiceError {
    /// Task input was rejected.
    #[error(transparent)]
    Create(#[from] CreateTaskError),
    /// Position did not resolve to a task.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Backing store returned an error.
    #[error("store error: {0}")]
    Store(#[from] Error),
}

impl TaskServiceError {
    /// True for storage failures, which the shell cannot recover from.
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use projectbot_core::TaskStatus;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use time::macros::date;

    #[derive(Clone, Default)]
    struct MockStore {
        inner: Arc<MockStoreInner>,
    }

    #[derive(Default)]
    struct MockStoreInner {
        stored: Mutex<Vec<Task>>,
        saves: Mutex<u32>,
        fail_load: Mutex<bool>,
        fail_save: Mutex<bool>,
    }

    fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    impl MockStore {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            let store = Self::default();
            *guard(&store.inner.stored) = tasks;
            store
        }

        fn saves(&self) -> u32 {
            *guard(&self.inner.saves)
        }

        fn stored(&self) -> Vec<Task> {
            guard(&self.inner.stored).clone()
        }

        fn fail_load(&self) {
            *guard(&self.inner.fail_load) = true;
        }

        fn fail_save(&self) {
            *guard(&self.inner.fail_save) = true;
        }
    }

    impl TaskPersistence for MockStore {
        type Error = anyhow::Error;

        fn load_all(&self) -> Result<Vec<Task>, Self::Error> {
            if *guard(&self.inner.fail_load) {
                return Err(anyhow!("disk unreadable"));
            }
            Ok(self.stored())
        }

        fn save_all(&self, tasks: &[Task]) -> Result<(), Self::Error> {
            if *guard(&self.inner.fail_save) {
                return Err(anyhow!("disk full"));
            }
            *guard(&self.inner.saves) += 1;
            *guard(&self.inner.stored) = tasks.to_vec();
            Ok(())
        }
    }

    fn input<'a>(name: &'a str, due: &'a str) -> NewTask<'a> {
        NewTask {
            name,
            due,
            category: None,
            priority: None,
        }
    }

    fn opened(store: &MockStore) -> TaskService<MockStore> {
        let (service, err) = TaskService::open(store.clone());
        assert!(err.is_none(), "load should succeed");
        service
    }

    #[test]
    fn open_loads_stored_tasks() {
        let mut seed = TaskList::new();
        seed.create(input("Seeded", "2024-01-10"))
            .unwrap_or_else(|err| panic!("seed: {err}"));
        let store = MockStore::with_tasks(seed.as_slice().to_vec());

        let service = opened(&store);
        assert_eq!(service.tasks(), &seed);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn open_falls_back_to_empty_on_load_failure() {
        let store = MockStore::default();
        store.fail_load();

        let (service, err) = TaskService::open(store);
        assert!(service.tasks().is_empty());
        assert!(err.is_some_and(|err| err.is_store()));
    }

    #[test]
    fn every_mutation_saves_the_whole_list() {
        let store = MockStore::default();
        let mut service = opened(&store);

        service
            .add(input("One", "2024-01-10"))
            .unwrap_or_else(|err| panic!("add one: {err}"));
        service
            .add(input("Two", "2024-01-11"))
            .unwrap_or_else(|err| panic!("add two: {err}"));
        assert_eq!(store.saves(), 2);

        let done = service
            .complete(1)
            .unwrap_or_else(|err| panic!("complete: {err}"));
        assert_eq!(done.status, TaskStatus::Completed);
        assert_eq!(store.saves(), 3);

        let removed = service
            .delete(2)
            .unwrap_or_else(|err| panic!("delete: {err}"));
        assert_eq!(removed.name, "Two");
        assert_eq!(store.saves(), 4);
        assert_eq!(store.stored(), service.tasks().as_slice());
    }

    #[test]
    fn rejected_input_does_not_save() {
        let store = MockStore::default();
        let mut service = opened(&store);

        let err = service.add(input("  ", "2024-01-10")).err();
        assert!(matches!(err, Some(TaskServiceError::Create(CreateTaskError::EmptyName))));
        let err = service.add(input("Task", "someday")).err();
        assert!(matches!(err, Some(TaskServiceError::Create(CreateTaskError::InvalidDate(_)))));
        let err = service.complete(1).err();
        assert!(matches!(err, Some(TaskServiceError::Lookup(LookupError::OutOfRange { .. }))));
        let err = service.delete(1).err();
        assert!(matches!(err, Some(TaskServiceError::Lookup(_))));

        assert!(service.tasks().is_empty());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn save_failure_is_reported_and_memory_keeps_the_change() {
        let store = MockStore::default();
        let mut service = opened(&store);
        store.fail_save();

        let err = service.add(input("Unsaved", "2024-01-10")).err();
        assert!(err.as_ref().is_some_and(TaskServiceError::is_store));
        assert_eq!(service.tasks().len(), 1);
        assert!(store.stored().is_empty());
    }

    #[test]
    fn date_queries_use_the_supplied_reference_date() {
        let store = MockStore::default();
        let mut service = opened(&store);
        service
            .add(input("Report", "2024-01-10"))
            .unwrap_or_else(|err| panic!("add: {err}"));

        let later = date!(2024 - 01 - 15);
        assert_eq!(service.overdue(later).len(), 1);
        assert!(service.due_today(later).is_empty());
        assert_eq!(service.reminders(later).overdue.len(), 1);
        assert_eq!(service.summary(later).overdue, 1);

        let same_day = date!(2024 - 01 - 10);
        assert!(service.overdue(same_day).is_empty());
        assert_eq!(service.due_today(same_day).len(), 1);
        assert_eq!(service.reminders(same_day).due_today.len(), 1);
    }
}
