//! Command execution
//!
//! The [`StepExecutor`] trait is the seam between graph resolution and
//! process spawning: the runner only needs `execute`, so tests can substitute
//! recording or failing steps without any external tools installed.

use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

use colored::*;

use crate::colors::get_task_color;
use crate::configs::tasks::{Command, TaskConfig};
use crate::types::{ChoreError, ChoreResult};

/// A single delegated external step
pub trait StepExecutor {
    /// Execute the task's command, mapping a non-zero exit to an error
    fn execute(&self, task: &TaskConfig) -> ChoreResult<()>;
}

/// Executor that delegates a task's command to the operating system
pub struct CommandExecutor {
    root: PathBuf,
}

impl CommandExecutor {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Run a prepared process with common setup and exit-code handling
    fn run_process(&self, task: &TaskConfig, command: &mut ProcessCommand) -> ChoreResult<()> {
        command.current_dir(&self.root);
        command.env("CHORE_TASK", &task.name);

        let status = command.status().map_err(|source| ChoreError::Launch {
            task: task.name.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ChoreError::CommandFailed {
                task: task.name.clone(),
                code: status.code().unwrap_or(-1),
            });
        }

        self.show_completion_message(task);
        Ok(())
    }

    fn show_completion_message(&self, task: &TaskConfig) {
        let task_color = get_task_color(&task.name);
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Completed {}", task.name).color(task_color)
        );
    }
}

impl StepExecutor for CommandExecutor {
    fn execute(&self, task: &TaskConfig) -> ChoreResult<()> {
        match &task.command {
            Some(Command::Shell(line)) => {
                let mut command = ProcessCommand::new("sh");
                command.arg("-c").arg(line);
                self.run_process(task, &mut command)
            }
            Some(Command::Argv(argv)) => {
                let Some((program, args)) = argv.split_first() else {
                    return Ok(());
                };
                let mut command = ProcessCommand::new(program);
                command.args(args);
                self.run_process(task, &mut command)
            }
            // Aggregate tasks have nothing to execute
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_task(name: &str, line: &str) -> TaskConfig {
        TaskConfig {
            name: name.to_string(),
            description: None,
            command: Some(Command::Shell(line.to_string())),
            dependencies: None,
            phony: None,
        }
    }

    #[test]
    fn zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(dir.path());
        executor.execute(&shell_task("ok", "true")).unwrap();
    }

    #[test]
    fn non_zero_exit_carries_the_code() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(dir.path());

        let err = executor.execute(&shell_task("bad", "exit 3")).unwrap_err();
        match err {
            ChoreError::CommandFailed { task, code } => {
                assert_eq!(task, "bad");
                assert_eq!(code, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn commands_run_in_the_harness_root() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(dir.path());

        executor
            .execute(&shell_task("touch", "touch marker"))
            .unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn removing_absent_files_is_idempotent() {
        // The clean task relies on `rm -rf` succeeding when nothing matches
        let dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(dir.path());
        let clean = shell_task("clean", "rm -rf tags include_tags");

        executor.execute(&clean).unwrap();
        executor.execute(&clean).unwrap();
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(dir.path());
        let task = TaskConfig {
            name: "ghost".to_string(),
            description: None,
            command: Some(Command::Argv(vec![
                "definitely-not-a-real-program".to_string()
            ])),
            dependencies: None,
            phony: None,
        };

        let err = executor.execute(&task).unwrap_err();
        assert!(matches!(err, ChoreError::Launch { .. }));
    }
}
