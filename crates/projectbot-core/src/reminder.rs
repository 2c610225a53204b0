//! Start-of-session reminders.

use time::Date;

use crate::task::Task;

/// Pending tasks that need attention relative to a reference date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reminders<'a> {
    /// Due before the reference date, in list order.
    pub overdue: Vec<&'a Task>,
    /// Due on the reference date, in list order.
    pub due_today: Vec<&'a Task>,
}

impl Reminders<'_> {
    /// Nothing to remind about.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.due_today.is_empty()
    }
}

/// Split pending tasks into overdue and due-today buckets.
///
/// Completed tasks never appear, and a task lands in at most one bucket.
#[must_use]
pub fn reminders(tasks: &[Task], today: Date) -> Reminders<'_> {
    let mut out = Reminders::default();
    for task in tasks {
        if task.is_overdue(today) {
            out.overdue.push(task);
        } else if task.is_due_on(today) {
            out.due_today.push(task);
        }
    }
    out
}
