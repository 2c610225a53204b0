use time::Date;

use crate::date::parse_due_date;
use crate::error::{CreateTaskError, LookupError};
use crate::task::{DEFAULT_CATEGORY, Priority, Task, TaskStatus};

/// Raw user input for a new task, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewTask<'a> {
    /// Task name; must not be blank.
    pub name: &'a str,
    /// Due date text in `YYYY-MM-DD` form.
    pub due: &'a str,
    /// Optional category; blank means [`DEFAULT_CATEGORY`].
    pub category: Option<&'a str>,
    /// Optional priority text; anything unrecognised means medium.
    pub priority: Option<&'a str>,
}

/// Aggregate counts over a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Number of tasks.
    pub total: usize,
    /// Tasks marked completed.
    pub completed: usize,
    /// `total - completed`.
    pub pending: usize,
    /// Pending tasks due before the reference date.
    pub overdue: usize,
}

/// Ordered, in-memory collection of tasks addressed by 1-based position.
///
/// Positions follow insertion order and shift down when an earlier task is
/// deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when there are no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Borrow the tasks in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Task at a 1-based position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Task> {
        position.checked_sub(1).and_then(|index| self.tasks.get(index))
    }

    /// Validate input and append a pending task.
    ///
    /// # Errors
    /// [`CreateTaskError::EmptyName`] for a blank name (checked first), then
    /// [`CreateTaskError::InvalidDate`] for an unparseable due date. The list is
    /// untouched on error.
    pub fn create(&mut self, input: NewTask<'_>) -> Result<&Task, CreateTaskError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CreateTaskError::EmptyName);
        }
        let due = parse_due_date(input.due).map_err(|err| CreateTaskError::InvalidDate(err.0))?;
        let category = input
            .category
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        let index = self.tasks.len();
        self.tasks.push(Task {
            name: name.to_owned(),
            due,
            category: category.to_owned(),
            priority: Priority::normalize(input.priority),
            status: TaskStatus::Pending,
        });
        Ok(&self.tasks[index])
    }

    /// Iterate `(position, task)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks.iter().enumerate().map(|(index, task)| (index + 1, task))
    }

    /// Mark the task at `position` completed. Completing twice is allowed.
    ///
    /// # Errors
    /// [`LookupError::OutOfRange`] when `position` is not in `1..=len`.
    pub fn complete(&mut self, position: usize) -> Result<&Task, LookupError> {
        let index = self.index_of(position)?;
        let task = &mut self.tasks[index];
        task.status = TaskStatus::Completed;
        Ok(task)
    }

    /// Remove and return the task at `position`.
    ///
    /// # Errors
    /// [`LookupError::OutOfRange`] when `position` is not in `1..=len`.
    pub fn delete(&mut self, position: usize) -> Result<Task, LookupError> {
        let index = self.index_of(position)?;
        Ok(self.tasks.remove(index))
    }

    /// Pending tasks due exactly on `today`, with their positions.
    #[must_use]
    pub fn due_today(&self, today: Date) -> Vec<(usize, &Task)> {
        self.iter().filter(|(_, task)| task.is_due_on(today)).collect()
    }

    /// Pending tasks due before `today`.
    #[must_use]
    pub fn overdue(&self, today: Date) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_overdue(today)).collect()
    }

    /// Counts relative to `today`.
    #[must_use]
    pub fn summary(&self, today: Date) -> Summary {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.is_completed()).count();
        let overdue = self.tasks.iter().filter(|task| task.is_overdue(today)).count();
        Summary {
            total,
            completed,
            pending: total - completed,
            overdue,
        }
    }

    fn index_of(&self, position: usize) -> Result<usize, LookupError> {
        if (1..=self.tasks.len()).contains(&position) {
            Ok(position - 1)
        } else {
            Err(LookupError::OutOfRange {
                position,
                len: self.tasks.len(),
            })
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}
