//! Result types for harness operations
//!
//! Presentation-friendly structures returned by the [`crate::harness`]
//! operations, so the CLI never has to reach into the graph internals.

use std::collections::HashMap;

use colored::Color;

/// Information about a declared task
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub description: Option<String>,
    pub prerequisites: Vec<String>,
    pub is_aggregate: bool,
}

/// Result of listing the declared tasks
#[derive(Debug)]
pub struct TaskListResult {
    pub tasks: Vec<TaskInfo>,
    pub task_colors: HashMap<String, Color>,
}

/// Result of resolving an execution plan without running it
#[derive(Debug)]
pub struct TaskPlanResult {
    pub requested: Vec<String>,
    pub order: Vec<String>,
}

/// Result of getting the prerequisite graph
#[derive(Debug)]
pub struct DependencyGraphResult {
    pub graph: Option<petgraph::Graph<String, ()>>,
    pub cycles: Vec<Vec<String>>,
}
