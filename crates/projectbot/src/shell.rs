//! Interactive prompt loop.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use projectbot_app::{TaskPersistence, TaskService, TaskServiceError};
use projectbot_core::Clock;
use tracing::debug;

use crate::commands::{self, Flow, ShellCommand};
use crate::view;

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input. Bytes that are not UTF-8 are replaced
    /// rather than reported, so a stray byte is just unrecognised input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

/// One interactive session over a single task list.
pub struct Shell<P, C, R, W> {
    service: TaskService<P>,
    load_error: Option<TaskServiceError>,
    clock: C,
    console: Console<R, W>,
    reminders_on_start: bool,
}

impl<P, C, R, W> Shell<P, C, R, W>
where
    P: TaskPersistence,
    C: Clock,
    R: BufRead,
    W: Write,
{
    /// Load the task list once and prepare the session.
    pub fn open(persistence: P, clock: C, console: Console<R, W>) -> Self {
        let (service, load_error) = TaskService::open(persistence);
        Self {
            service,
            load_error,
            clock,
            console,
            reminders_on_start: true,
        }
    }

    #[must_use]
    pub fn with_start_reminders(mut self, enabled: bool) -> Self {
        self.reminders_on_start = enabled;
        self
    }

    /// Run until `exit`, end of input, or a fatal I/O error.
    ///
    /// # Errors
    /// Console failures and failed saves end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        self.greet().context("failed to write to the console")?;

        loop {
            let line = self
                .console
                .ask("\nEnter command: ")
                .context("failed to read command")?;
            let Some(line) = line else {
                debug!("end of input");
                break;
            };

            let flow = match line.parse::<ShellCommand>() {
                Ok(command) => {
                    debug!(%command, "dispatching");
                    commands::run(command, &mut self.service, &mut self.console, &self.clock)?
                }
                Err(err) => {
                    debug!(error = %err, "rejected input");
                    self.console.say(view::INVALID_COMMAND)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.console.into_output()
    }

    fn greet(&mut self) -> io::Result<()> {
        for line in view::banner_lines() {
            self.console.say(line)?;
        }
        if let Some(err) = self.load_error.take() {
            self.console
                .say(format!("Could not load saved tasks ({err}); starting with an empty list."))?;
        }
        if self.reminders_on_start {
            let lines = view::reminder_lines(&self.service.reminders(self.clock.today()));
            for line in lines {
                self.console.say(line)?;
            }
        }
        Ok(())
    }
}
