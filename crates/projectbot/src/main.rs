//! CLI entry point for projectbot.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use projectbot_app::ProjectConfig;
use projectbot_core::SystemClock;
use projectbot_store_json::JsonFileStore;
use shell::{Console, Shell};

mod commands;
mod shell;
mod view;

/// Interactive task tracker with due-date reminders.
#[derive(Parser, Debug)]
#[command(
    name = "projectbot",
    version,
    about = "projectbot: track tasks with due dates from an interactive prompt",
    long_about = "projectbot: track tasks with due dates from an interactive prompt.\n\n\
        Commands are typed at the prompt: add task, list tasks, complete task, \
        delete task, tasks today, summary, exit.\n\
        Settings are read from .projectbot/config.toml in the working directory."
)]
struct Cli {}

fn main() -> Result<()> {
    let Cli {} = Cli::parse();
    install_tracing();

    let workdir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = ProjectConfig::load(&workdir)?;
    let store = JsonFileStore::new(config.storage.resolve(&workdir));
    tracing::debug!(path = %store.path().display(), "using task file");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Shell::open(store, SystemClock, console)
        .with_start_reminders(config.reminders.on_start)
        .run()
}

fn install_tracing() {
    // RUST_LOG overrides the default; WARN keeps the prompt transcript clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["projectbot"]).is_ok());
    }

    #[test]
    fn rejects_task_arguments_at_launch() {
        assert!(Cli::try_parse_from(["projectbot", "add"]).is_err());
        assert!(Cli::try_parse_from(["projectbot", "--file", "tasks.json"]).is_err());
    }
}
