use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;

/// Serde adapter keeping due dates in the same shape users type and see.
mod due_date {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::Date;

    use crate::date::{format_due_date, parse_due_date};

    #[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by `serialize_with`
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_due_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_due_date(&raw).map_err(de::Error::custom)
    }
}

/// Category assigned when the user leaves it blank.
pub const DEFAULT_CATEGORY: &str = "general";

/// Urgency attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Fallback for anything unrecognised.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// String representation used in the task file and listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Interpret free-form user input, falling back to [`Priority::Medium`].
    ///
    /// Matching ignores surrounding whitespace and case.
    #[must_use]
    pub fn normalize(input: Option<&str>) -> Self {
        let Some(raw) = input else {
            return Self::default();
        };
        match raw.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Still open.
    #[default]
    Pending,
    /// Done. There is no way back to pending.
    Completed,
}

impl TaskStatus {
    /// String representation used in the task file and listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Non-empty label.
    pub name: String,
    /// Calendar due date.
    #[serde(with = "due_date")]
    pub due: Date,
    /// Free-form grouping label.
    pub category: String,
    /// Urgency.
    pub priority: Priority,
    /// Completion state.
    pub status: TaskStatus,
}

impl Task {
    /// Returns true once the task has been completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Pending and due strictly before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: Date) -> bool {
        !self.is_completed() && self.due < today
    }

    /// Pending and due exactly on `today`.
    #[must_use]
    pub fn is_due_on(&self, today: Date) -> bool {
        !self.is_completed() && self.due == today
    }
}
