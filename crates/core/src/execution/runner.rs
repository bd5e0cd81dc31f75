//! High-level task runner
//!
//! Depth-first prerequisite resolution with at-most-once execution per
//! invocation. Execution is strictly sequential: each delegated command runs
//! to completion before the next begins, and the first failure halts all
//! remaining work.

use std::path::{Path, PathBuf};

use colored::*;

use crate::colors::get_task_color;
use crate::configs::tasks::{Command, TaskConfig};
use crate::execution::command::StepExecutor;
use crate::execution::context::ExecutionRecord;
use crate::graph::TaskGraph;
use crate::types::{ChoreError, ChoreResult};

/// Runner that walks the task graph and delegates commands to a step executor
pub struct TaskRunner<'a> {
    graph: &'a TaskGraph,
    root: PathBuf,
}

impl<'a> TaskRunner<'a> {
    pub fn new(graph: &'a TaskGraph, root: &Path) -> Self {
        Self {
            graph,
            root: root.to_path_buf(),
        }
    }

    /// Run the requested tasks in order, sharing one execution record
    ///
    /// A task reachable from several of the requested names still executes
    /// only once.
    pub async fn run_tasks(
        &self,
        task_names: &[String],
        steps: &dyn StepExecutor,
    ) -> ChoreResult<()> {
        let mut record = ExecutionRecord::new();
        for name in task_names {
            self.run_task(name, steps, &mut record)?;
        }
        Ok(())
    }

    /// Execute a single task after all of its prerequisites
    fn run_task(
        &self,
        name: &str,
        steps: &dyn StepExecutor,
        record: &mut ExecutionRecord,
    ) -> ChoreResult<()> {
        let task = self
            .graph
            .task(name)
            .ok_or_else(|| ChoreError::UnknownTask(name.to_string()))?;

        if record.is_completed(name) {
            return Ok(());
        }
        record.begin(name)?;

        for dep in task.prerequisites() {
            self.run_task(dep, steps, record)?;
        }

        // Non-phony tasks are skipped when their artifact already exists.
        // Every built-in task is phony, so this only fires for overrides.
        if !task.is_phony() && self.root.join(&task.name).exists() {
            println!(
                "{}",
                format!("'{}' is up to date, skipping", task.name).dimmed()
            );
            record.finish(name);
            return Ok(());
        }

        if let Some(command) = &task.command {
            self.print_task_header(task, command);
            steps.execute(task)?;
        }

        record.finish(name);
        Ok(())
    }

    fn print_task_header(&self, task: &TaskConfig, command: &Command) {
        let task_color = get_task_color(&task.name);
        println!();
        println!(
            "┌─ {}",
            format!("Running task '{}'", task.name)
                .color(task_color)
                .bold()
        );
        println!(
            "└─ {} {}",
            "$".bright_black(),
            command.display_line().bright_black()
        );
    }
}
