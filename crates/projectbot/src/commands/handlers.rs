use std::io::{BufRead, Write};

use anyhow::Result;
use projectbot_app::{TaskPersistence, TaskService, TaskServiceError};
use projectbot_core::{NewTask, parse_due_date};
use time::Date;

use super::Flow;
use crate::shell::Console;
use crate::view;

pub fn handle_add<P, R, W>(service: &mut TaskService<P>, console: &mut Console<R, W>) -> Result<Flow>
where
    P: TaskPersistence,
    R: BufRead,
    W: Write,
{
    let Some(name) = console.ask("Task name: ")? else {
        return Ok(Flow::Exit);
    };
    if name.trim().is_empty() {
        console.say(view::EMPTY_NAME)?;
        return Ok(Flow::Continue);
    }

    let Some(due) = console.ask("Due date (YYYY-MM-DD): ")? else {
        return Ok(Flow::Exit);
    };
    if parse_due_date(&due).is_err() {
        console.say(view::INVALID_DATE)?;
        return Ok(Flow::Continue);
    }

    let Some(category) = console.ask("Category (e.g., coding, report): ")? else {
        return Ok(Flow::Exit);
    };
    let Some(priority) = console.ask("Priority (low/medium/high): ")? else {
        return Ok(Flow::Exit);
    };

    let outcome = service.add(NewTask {
        name: &name,
        due: &due,
        category: Some(&category),
        priority: Some(&priority),
    });
    match outcome {
        Ok(_) => console.say(view::TASK_ADDED)?,
        Err(TaskServiceError::Create(err)) => console.say(view::create_error_message(&err))?,
        Err(err) => return Err(save_failure(err)),
    }
    Ok(Flow::Continue)
}

pub fn handle_list<P, R, W>(service: &TaskService<P>, console: &mut Console<R, W>) -> Result<Flow>
where
    R: BufRead,
    W: Write,
{
    print_list(service, console)?;
    Ok(Flow::Continue)
}

pub fn handle_complete<P, R, W>(service: &mut TaskService<P>, console: &mut Console<R, W>) -> Result<Flow>
where
    P: TaskPersistence,
    R: BufRead,
    W: Write,
{
    if !print_list(service, console)? {
        return Ok(Flow::Continue);
    }
    let Some(answer) = console.ask("Task number to complete: ")? else {
        return Ok(Flow::Exit);
    };

    match parse_position(&answer).map(|position| service.complete(position)) {
        Some(Ok(_)) => console.say(view::TASK_COMPLETED)?,
        None | Some(Err(TaskServiceError::Lookup(_))) => console.say(view::INVALID_TASK_NUMBER)?,
        Some(Err(err)) => return Err(save_failure(err)),
    }
    Ok(Flow::Continue)
}

pub fn handle_delete<P, R, W>(service: &mut TaskService<P>, console: &mut Console<R, W>) -> Result<Flow>
where
    P: TaskPersistence,
    R: BufRead,
    W: Write,
{
    if !print_list(service, console)? {
        return Ok(Flow::Continue);
    }
    let Some(answer) = console.ask("Task number to delete: ")? else {
        return Ok(Flow::Exit);
    };

    match parse_position(&answer).map(|position| service.delete(position)) {
        Some(Ok(removed)) => console.say(view::deleted_line(&removed))?,
        None | Some(Err(TaskServiceError::Lookup(_))) => console.say(view::INVALID_TASK_NUMBER)?,
        Some(Err(err)) => return Err(save_failure(err)),
    }
    Ok(Flow::Continue)
}

pub fn handle_today<P, R, W>(service: &TaskService<P>, console: &mut Console<R, W>, today: Date) -> Result<Flow>
where
    P: TaskPersistence,
    R: BufRead,
    W: Write,
{
    let due = service.due_today(today);
    if due.is_empty() {
        console.say(view::NO_TASKS_TODAY)?;
    }
    for (position, task) in due {
        console.say(view::due_today_line(position, task))?;
    }
    Ok(Flow::Continue)
}

pub fn handle_summary<P, R, W>(service: &TaskService<P>, console: &mut Console<R, W>, today: Date) -> Result<Flow>
where
    P: TaskPersistence,
    R: BufRead,
    W: Write,
{
    for line in view::summary_lines(&service.summary(today)) {
        console.say(line)?;
    }
    Ok(Flow::Continue)
}

pub fn handle_exit<R, W>(console: &mut Console<R, W>) -> Result<Flow>
where
    R: BufRead,
    W: Write,
{
    console.say(view::EXITING)?;
    Ok(Flow::Exit)
}

/// Print the numbered list. Returns false when there was nothing to print.
fn print_list<P, R, W>(service: &TaskService<P>, console: &mut Console<R, W>) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let tasks = service.tasks();
    if tasks.is_empty() {
        console.say(view::NO_TASKS)?;
        return Ok(false);
    }
    for (position, task) in tasks.iter() {
        console.say(view::task_line(position, task))?;
    }
    Ok(true)
}

/// `None` when the answer is not a non-negative integer.
fn parse_position(answer: &str) -> Option<usize> {
    answer.trim().parse().ok()
}

fn save_failure(err: TaskServiceError) -> anyhow::Error {
    anyhow::Error::new(err).context("failed to save tasks")
}
