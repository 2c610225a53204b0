//! End-to-end sessions against the compiled binary.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn run_session(workdir: &Path, script: &str) -> (bool, String) {
    let output = Command::cargo_bin("projectbot")
        .expect("binary built")
        .current_dir(workdir)
        .env_remove("RUST_LOG")
        .write_stdin(script)
        .output()
        .expect("run projectbot");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("utf8 stdout"),
    )
}

#[test]
fn tasks_persist_between_sessions() {
    let dir = TempDir::with_prefix("projectbot-cli-").expect("create temp dir");

    let (ok, out) = run_session(
        dir.path(),
        "add task\nShip it\n2999-01-01\nrelease\nhigh\nexit\n",
    );
    assert!(ok);
    assert!(out.contains("Task added."));

    let stored = fs::read_to_string(dir.path().join("tasks.json")).expect("task file written");
    assert!(stored.contains("\"name\": \"Ship it\""));
    assert!(stored.contains("\"due\": \"2999-01-01\""));

    let (ok, out) = run_session(dir.path(), "list tasks\nexit\n");
    assert!(ok);
    assert!(out.contains("1. Ship it | pending | due 2999-01-01 | high | release"));
}

#[test]
fn overdue_reminder_is_shown_at_startup() {
    let dir = TempDir::with_prefix("projectbot-cli-").expect("create temp dir");
    fs::write(
        dir.path().join("tasks.json"),
        r#"[{"name":"Old report","due":"2000-01-01","category":"general","priority":"low","status":"pending"}]"#,
    )
    .expect("seed tasks");

    let (ok, out) = run_session(dir.path(), "exit\n");
    assert!(ok);
    assert!(out.contains("Reminders:\nOVERDUE: Old report (due 2000-01-01)\n"));
}

#[test]
fn configured_storage_path_is_used() {
    let dir = TempDir::with_prefix("projectbot-cli-").expect("create temp dir");
    fs::create_dir_all(dir.path().join(".projectbot")).expect("config dir");
    fs::write(
        dir.path().join(".projectbot/config.toml"),
        "[storage]\npath = \"data/mine.json\"\n",
    )
    .expect("write config");

    let (ok, _) = run_session(dir.path(), "add task\nConfigured\n2999-01-01\n\n\n");
    assert!(ok);
    assert!(dir.path().join("data/mine.json").exists());
    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn unreadable_task_file_is_not_fatal() {
    let dir = TempDir::with_prefix("projectbot-cli-").expect("create temp dir");
    fs::write(dir.path().join("tasks.json"), "not json at all").expect("seed garbage");

    let (ok, out) = run_session(dir.path(), "summary\nexit\n");
    assert!(ok);
    assert!(out.contains("Could not load saved tasks"));
    assert!(out.contains("Total tasks: 0"));
}
