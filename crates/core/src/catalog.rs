//! Built-in task catalog
//!
//! The static task declarations for the churn prediction project. Every task
//! is a thin shell-out; the catalog only records the command line and the
//! prerequisite ordering. `clean` and `sync-with-git` discard local state and
//! are meant to be invoked standalone, never as part of an aggregate that
//! still needs the working tree.

use crate::configs::tasks::{Command, TaskConfig};

/// Name of the optional override file loaded from the harness root
pub const TASKS_FILE: &str = "chore.yml";

fn shell(name: &str, description: &str, command: &str, dependencies: &[&str]) -> TaskConfig {
    TaskConfig {
        name: name.to_string(),
        description: Some(description.to_string()),
        command: Some(Command::Shell(command.to_string())),
        dependencies: to_names(dependencies),
        phony: None,
    }
}

fn aggregate(name: &str, description: &str, dependencies: &[&str]) -> TaskConfig {
    TaskConfig {
        name: name.to_string(),
        description: Some(description.to_string()),
        command: None,
        dependencies: to_names(dependencies),
        phony: None,
    }
}

fn to_names(names: &[&str]) -> Option<Vec<String>> {
    if names.is_empty() {
        None
    } else {
        Some(names.iter().map(|n| n.to_string()).collect())
    }
}

/// The authoritative task set for the project
pub fn builtin_tasks() -> Vec<TaskConfig> {
    vec![
        shell(
            "train",
            "Train the churn model and log the run to mlflow",
            "poetry run python -m customer_churn_prediction.train",
            &[],
        ),
        shell(
            "run-mlflow-server",
            "Start the mlflow tracking server on all interfaces, port 5000",
            "poetry run mlflow server --host 0.0.0.0 --port 5000",
            &[],
        ),
        aggregate(
            "all-tests",
            "Formatting check, type check, then the test suite",
            &["black", "mypy", "tests"],
        ),
        shell(
            "tests",
            "Run the test suite in an isolated tox environment",
            "poetry run tox",
            &[],
        ),
        shell(
            "black",
            "Check code formatting",
            "poetry run black --check customer_churn_prediction tests",
            &[],
        ),
        shell(
            "mypy",
            "Run the static type checker",
            "poetry run mypy customer_churn_prediction",
            &[],
        ),
        shell(
            "tags",
            "Generate a ctags index for project sources",
            "ctags -f tags *.py */*.py */*/*.py",
            &[],
        ),
        shell(
            "include-tags",
            "Generate a separate ctags index for third-party library sources",
            "ctags -f include_tags -R .venv/lib/python3.9/site-packages",
            &[],
        ),
        shell("git-fetch", "Fetch remote state", "git fetch", &[]),
        shell(
            "sync-with-git",
            "Discard local commits and match the upstream branch",
            "git reset --hard @{upstream}",
            &["git-fetch"],
        ),
        shell(
            "clean",
            "Remove generated tag indexes and bytecode caches",
            "rm -rf tags include_tags __pycache__ */__pycache__ */*/__pycache__",
            &[],
        ),
    ]
}
