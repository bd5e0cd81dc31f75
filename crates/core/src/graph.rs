//! Task graph construction and validation
//!
//! The graph is built once at startup from the static declarations and stays
//! immutable for the duration of a run. Cycles and missing prerequisites are
//! configuration errors caught here, before anything executes.

use petgraph::algo::kosaraju_scc;
use petgraph::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::configs::tasks::TaskConfig;
use crate::types::{ChoreError, ChoreResult};

/// The declared tasks together with their prerequisite graph
#[derive(Debug)]
pub struct TaskGraph {
    pub tasks: Vec<TaskConfig>,
    pub dep_graph: Option<DiGraph<String, ()>>,
    pub dependency_cycles: Vec<Vec<String>>,
}

impl TaskGraph {
    pub fn new(tasks: Vec<TaskConfig>) -> Self {
        Self {
            tasks,
            dep_graph: None,
            dependency_cycles: Vec::new(),
        }
    }

    pub fn task(&self, name: &str) -> Option<&TaskConfig> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.task(name).is_some()
    }
}

/// Build the prerequisite graph from the declared tasks
///
/// Edges point from a task to each of its prerequisites. Cycles are recorded
/// on the graph rather than returned as an error so callers can decide how to
/// report them.
pub fn build_dependency_graph(graph: &mut TaskGraph) -> ChoreResult<()> {
    let mut dep_graph = DiGraph::<String, ()>::new();
    let mut node_indices = HashMap::new();

    for task in &graph.tasks {
        if node_indices.contains_key(&task.name) {
            return Err(ChoreError::Config(format!(
                "Task '{}' is declared more than once",
                task.name
            )));
        }
        let node_index = dep_graph.add_node(task.name.clone());
        node_indices.insert(task.name.clone(), node_index);
    }

    for task in &graph.tasks {
        let from_node = node_indices[&task.name];
        for dep in task.prerequisites() {
            if let Some(&to_node) = node_indices.get(dep) {
                dep_graph.add_edge(from_node, to_node, ());
            } else {
                return Err(ChoreError::Config(format!(
                    "Task '{}' depends on '{}' which is not declared",
                    task.name, dep
                )));
            }
        }
    }

    // Detect cycles using strongly connected components
    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&dep_graph)
        .into_iter()
        .filter_map(|component| {
            if component.len() > 1 {
                let mut cycle = component
                    .iter()
                    .map(|node| dep_graph[*node].clone())
                    .collect::<Vec<_>>();
                cycle.sort();
                Some(cycle)
            } else {
                let node = component[0];
                if dep_graph.contains_edge(node, node) {
                    Some(vec![dep_graph[node].clone()])
                } else {
                    None
                }
            }
        })
        .collect();

    cycles.sort();

    graph.dependency_cycles = cycles;
    graph.dep_graph = Some(dep_graph);
    Ok(())
}

/// Render recorded cycles as "a -> b -> a; ..." for error messages
pub fn describe_cycles(cycles: &[Vec<String>]) -> String {
    cycles
        .iter()
        .map(|cycle| {
            let mut path = cycle.clone();
            if let Some(first) = path.first().cloned() {
                path.push(first);
            }
            path.join(" -> ")
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Resolve the order in which tasks would execute for the given requests
///
/// Depth-first, prerequisites before dependents, declared order preserved,
/// each task at most once even when reached through multiple paths. The
/// requested tasks themselves appear in the result after their prerequisites.
pub fn resolve_execution_order(graph: &TaskGraph, requested: &[String]) -> ChoreResult<Vec<String>> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();

    for name in requested {
        visit(graph, name, &mut visited, &mut order)?;
    }

    // If cycles involve any resolved task, refuse to produce an order
    if !graph.dependency_cycles.is_empty() {
        let resolved: HashSet<&String> = order.iter().collect();
        let relevant_cycles: Vec<Vec<String>> = graph
            .dependency_cycles
            .iter()
            .filter(|cycle| cycle.iter().any(|name| resolved.contains(name)))
            .cloned()
            .collect();

        if !relevant_cycles.is_empty() {
            return Err(ChoreError::CyclicDependency(describe_cycles(
                &relevant_cycles,
            )));
        }
    }

    Ok(order)
}

fn visit(
    graph: &TaskGraph,
    name: &str,
    visited: &mut HashSet<String>,
    order: &mut Vec<String>,
) -> ChoreResult<()> {
    let task = graph
        .task(name)
        .ok_or_else(|| ChoreError::UnknownTask(name.to_string()))?;

    if !visited.insert(name.to_string()) {
        return Ok(());
    }

    for dep in task.prerequisites() {
        visit(graph, dep, visited, order)?;
    }

    order.push(task.name.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::tasks::Command;

    fn task(name: &str, deps: &[&str]) -> TaskConfig {
        TaskConfig {
            name: name.to_string(),
            description: None,
            command: Some(Command::Shell("true".to_string())),
            dependencies: if deps.is_empty() {
                None
            } else {
                Some(deps.iter().map(|d| d.to_string()).collect())
            },
            phony: None,
        }
    }

    fn built(tasks: Vec<TaskConfig>) -> TaskGraph {
        let mut graph = TaskGraph::new(tasks);
        build_dependency_graph(&mut graph).unwrap();
        graph
    }

    #[test]
    fn missing_prerequisite_is_a_config_error() {
        let mut graph = TaskGraph::new(vec![task("a", &["nope"])]);
        let err = build_dependency_graph(&mut graph).unwrap_err();
        assert!(err.to_string().contains("'nope' which is not declared"));
    }

    #[test]
    fn duplicate_task_names_are_rejected() {
        let mut graph = TaskGraph::new(vec![task("a", &[]), task("a", &[])]);
        let err = build_dependency_graph(&mut graph).unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn cycle_is_detected_and_described() {
        let mut graph = TaskGraph::new(vec![task("a", &["b"]), task("b", &["a"])]);
        build_dependency_graph(&mut graph).unwrap();

        assert_eq!(graph.dependency_cycles.len(), 1);
        assert_eq!(
            graph.dependency_cycles[0],
            vec!["a".to_string(), "b".to_string()]
        );

        let err = resolve_execution_order(&graph, &["a".to_string()]).unwrap_err();
        assert!(err.to_string().contains("a -> b -> a"));
    }

    #[test]
    fn self_dependency_counts_as_a_cycle() {
        let mut graph = TaskGraph::new(vec![task("a", &["a"])]);
        build_dependency_graph(&mut graph).unwrap();
        assert_eq!(graph.dependency_cycles, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn order_puts_shared_prerequisites_first_and_once() {
        // agg depends on [a, b, c]; b also depends on a
        let graph = built(vec![
            task("a", &[]),
            task("b", &["a"]),
            task("c", &[]),
            task("agg", &["a", "b", "c"]),
        ]);

        let order = resolve_execution_order(&graph, &["agg".to_string()]).unwrap();
        assert_eq!(order, ["a", "b", "c", "agg"]);
    }

    #[test]
    fn unknown_task_fails_resolution() {
        let graph = built(vec![task("a", &[])]);
        let err = resolve_execution_order(&graph, &["mystery".to_string()]).unwrap_err();
        assert!(matches!(err, ChoreError::UnknownTask(name) if name == "mystery"));
    }
}
