//! Text rendering for shell output.

use projectbot_core::{CreateTaskError, Reminders, Summary, Task, format_due_date};

use crate::commands::ShellCommand;

pub const NO_TASKS: &str = "No tasks found.";
pub const NO_TASKS_TODAY: &str = "No tasks due today.";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const INVALID_TASK_NUMBER: &str = "Invalid task number.";
pub const EMPTY_NAME: &str = "Task name cannot be empty.";
pub const INVALID_DATE: &str = "Invalid date format.";
pub const TASK_ADDED: &str = "Task added.";
pub const TASK_COMPLETED: &str = "Task marked as completed.";
pub const EXITING: &str = "Exiting.";

pub fn banner_lines() -> Vec<String> {
    let commands = ShellCommand::ALL
        .iter()
        .map(|command| command.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    vec![
        "Project Management Bot".to_owned(),
        "Commands:".to_owned(),
        commands,
    ]
}

/// `<pos>. <name> | <status> | due <date> | <priority> | <category>`
pub fn task_line(position: usize, task: &Task) -> String {
    format!(
        "{position}. {} | {} | due {} | {} | {}",
        task.name,
        task.status,
        format_due_date(task.due),
        task.priority,
        task.category
    )
}

pub fn due_today_line(position: usize, task: &Task) -> String {
    format!("{position}. {} | due today", task.name)
}

pub fn summary_lines(summary: &Summary) -> Vec<String> {
    vec![
        "Summary:".to_owned(),
        format!("Total tasks: {}", summary.total),
        format!("Completed: {}", summary.completed),
        format!("Pending: {}", summary.pending),
        format!("Overdue: {}", summary.overdue),
    ]
}

/// Empty when there is nothing to remind about.
pub fn reminder_lines(reminders: &Reminders<'_>) -> Vec<String> {
    if reminders.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Reminders:".to_owned()];
    lines.extend(
        reminders
            .overdue
            .iter()
            .map(|task| format!("OVERDUE: {} (due {})", task.name, format_due_date(task.due))),
    );
    lines.extend(
        reminders
            .due_today
            .iter()
            .map(|task| format!("DUE TODAY: {}", task.name)),
    );
    lines.push(String::new());
    lines
}

pub fn deleted_line(task: &Task) -> String {
    format!("Deleted task: {}", task.name)
}

pub const fn create_error_message(err: &CreateTaskError) -> &'static str {
    match err {
        CreateTaskError::EmptyName => EMPTY_NAME,
        CreateTaskError::InvalidDate(_) => INVALID_DATE,
    }
}
