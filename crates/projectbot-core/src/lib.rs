//! Domain types and queries for projectbot task lists.
//!
//! Everything here is pure: date-sensitive operations take the reference date
//! as an argument and nothing touches the filesystem.

/// Reference-date sources.
pub mod clock;
/// Due-date parsing and formatting.
pub mod date;
/// Error types.
pub mod error;
/// The ordered task collection.
pub mod list;
/// Start-of-session reminders.
pub mod reminder;
/// Task record and its enumerations.
pub mod task;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{DUE_DATE_FORMAT, format_due_date, parse_due_date};
pub use error::{CreateTaskError, DueDateError, LookupError};
pub use list::{NewTask, Summary, TaskList};
pub use reminder::{Reminders, reminders};
pub use task::{DEFAULT_CATEGORY, Priority, Task, TaskStatus};
