//! Shell command vocabulary and dispatch.

use std::io::{BufRead, Write};
use std::{fmt, str::FromStr};

use anyhow::Result;
use projectbot_app::{TaskPersistence, TaskService};
use projectbot_core::Clock;

use crate::shell::Console;

mod handlers;

/// Whether the shell keeps prompting after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Fixed set of commands understood at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    AddTask,
    ListTasks,
    CompleteTask,
    DeleteTask,
    TasksToday,
    Summary,
    Exit,
}

impl ShellCommand {
    /// Every command, in the order shown in the banner.
    pub const ALL: [Self; 7] = [
        Self::AddTask,
        Self::ListTasks,
        Self::CompleteTask,
        Self::DeleteTask,
        Self::TasksToday,
        Self::Summary,
        Self::Exit,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddTask => "add task",
            Self::ListTasks => "list tasks",
            Self::CompleteTask => "complete task",
            Self::DeleteTask => "delete task",
            Self::TasksToday => "tasks today",
            Self::Summary => "summary",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that is not part of the command vocabulary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command '{0}'")]
pub struct ParseCommandError(pub String);

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    /// Case-insensitive, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == normalized)
            .ok_or_else(|| ParseCommandError(s.trim().to_owned()))
    }
}

/// Execute one command against the session state.
///
/// # Errors
/// Only console I/O failures and failed saves are returned; user mistakes are
/// reported on the console instead.
pub fn run<P, C, R, W>(
    command: ShellCommand,
    service: &mut TaskService<P>,
    console: &mut Console<R, W>,
    clock: &C,
) -> Result<Flow>
where
    P: TaskPersistence,
    C: Clock,
    R: BufRead,
    W: Write,
{
    match command {
        ShellCommand::AddTask => handlers::handle_add(service, console),
        ShellCommand::ListTasks => handlers::handle_list(service, console),
        ShellCommand::CompleteTask => handlers::handle_complete(service, console),
        ShellCommand::DeleteTask => handlers::handle_delete(service, console),
        ShellCommand::TasksToday => handlers::handle_today(service, console, clock.today()),
        ShellCommand::Summary => handlers::handle_summary(service, console, clock.today()),
        ShellCommand::Exit => handlers::handle_exit(console),
    }
}
