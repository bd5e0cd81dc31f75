//! High-level harness interface
//!
//! This module provides the [`Harness`], the primary entry point for all
//! operations: it loads the built-in catalog, merges the optional `chore.yml`
//! override file, validates the prerequisite graph once, and then exposes
//! list/plan/run/graph operations over the immutable result.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chore_core::harness::{Harness, HarnessConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> chore_core::types::ChoreResult<()> {
//! let harness = Harness::new(HarnessConfig {
//!     root: PathBuf::from("."),
//! })?;
//!
//! let tasks = harness.list_tasks();
//!
//! harness.run(&["all-tests".to_string()]).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::{builtin_tasks, TASKS_FILE};
use crate::colors::get_task_color;
use crate::configs::tasks::{parse_tasks_config, TaskConfig, TasksFileConfig};
use crate::execution::{CommandExecutor, TaskRunner};
use crate::graph::{
    build_dependency_graph, describe_cycles, resolve_execution_order, TaskGraph,
};
use crate::results::{DependencyGraphResult, TaskInfo, TaskListResult, TaskPlanResult};
use crate::types::{ChoreError, ChoreResult};

/// High-level harness that owns the validated task graph
#[derive(Debug)]
pub struct Harness {
    pub graph: TaskGraph,
    pub root: PathBuf,
}

/// Configuration for initializing a harness
pub struct HarnessConfig {
    pub root: PathBuf,
}

impl Harness {
    /// Initialize a harness from the given project root
    ///
    /// The graph is validated here, before anything executes: a prerequisite
    /// naming an undeclared task or any dependency cycle aborts startup.
    pub fn new(config: HarnessConfig) -> ChoreResult<Self> {
        let mut tasks = builtin_tasks();
        if let Some(file_config) = Self::load_tasks_file(&config.root)? {
            merge_tasks(&mut tasks, file_config.tasks);
        }

        let mut graph = TaskGraph::new(tasks);
        build_dependency_graph(&mut graph)?;

        if !graph.dependency_cycles.is_empty() {
            return Err(ChoreError::CyclicDependency(describe_cycles(
                &graph.dependency_cycles,
            )));
        }

        Ok(Self {
            graph,
            root: config.root,
        })
    }

    /// List all declared tasks in declaration order
    pub fn list_tasks(&self) -> TaskListResult {
        let tasks = self
            .graph
            .tasks
            .iter()
            .map(|task| TaskInfo {
                name: task.name.clone(),
                description: task.description.clone(),
                prerequisites: task.prerequisites().to_vec(),
                is_aggregate: task.is_aggregate(),
            })
            .collect();

        TaskListResult {
            tasks,
            task_colors: self.task_colors(),
        }
    }

    /// Resolve the execution order for the requested tasks without running them
    pub fn plan(&self, task_names: &[String]) -> ChoreResult<TaskPlanResult> {
        let order = resolve_execution_order(&self.graph, task_names)?;
        Ok(TaskPlanResult {
            requested: task_names.to_vec(),
            order,
        })
    }

    /// Execute the requested tasks and their prerequisites
    pub async fn run(&self, task_names: &[String]) -> ChoreResult<()> {
        let steps = CommandExecutor::new(&self.root);
        TaskRunner::new(&self.graph, &self.root)
            .run_tasks(task_names, &steps)
            .await
    }

    /// Get the prerequisite graph for display
    pub fn dependency_graph(&self) -> DependencyGraphResult {
        DependencyGraphResult {
            graph: self.graph.dep_graph.clone(),
            cycles: self.graph.dependency_cycles.clone(),
        }
    }

    fn load_tasks_file(root: &Path) -> ChoreResult<Option<TasksFileConfig>> {
        let path = root.join(TASKS_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            ChoreError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = parse_tasks_config(&content).map_err(|e| {
            ChoreError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(config))
    }

    /// Generate a consistent color mapping for all tasks
    fn task_colors(&self) -> HashMap<String, colored::Color> {
        self.graph
            .tasks
            .iter()
            .map(|task| (task.name.clone(), get_task_color(&task.name)))
            .collect()
    }
}

/// Apply override declarations: replace built-ins by name, append new tasks
fn merge_tasks(tasks: &mut Vec<TaskConfig>, overrides: Vec<TaskConfig>) {
    for override_task in overrides {
        if let Some(existing) = tasks.iter_mut().find(|t| t.name == override_task.name) {
            *existing = override_task;
        } else {
            tasks.push(override_task);
        }
    }
}
