use anyhow::Result;
use chore_core::Harness;
use colored::*;

pub fn execute(harness: &Harness) -> Result<()> {
    println!("{}", "Task Dependency Graph:".bold().underline());

    let result = harness.dependency_graph();

    let Some(graph) = result.graph.as_ref() else {
        println!("No dependency graph available");
        return Ok(());
    };

    if !result.cycles.is_empty() {
        let cycles_description = result
            .cycles
            .iter()
            .map(|cycle| {
                let mut path = cycle.clone();
                if let Some(first) = path.first().cloned() {
                    path.push(first);
                }
                path.join(" -> ")
            })
            .collect::<Vec<_>>()
            .join("; ");

        println!(
            "{} {}",
            "Warning:".yellow().bold(),
            format!("Circular dependencies detected: {}", cycles_description).yellow()
        );
    }

    for (node_index, node_weight) in graph.node_indices().zip(graph.node_weights()) {
        println!("{}", node_weight.blue().bold());

        let mut prerequisites = Vec::new();
        for neighbor in graph.neighbors(node_index) {
            if let Some(name) = graph.node_weight(neighbor) {
                prerequisites.push(name.clone());
            }
        }

        if !prerequisites.is_empty() {
            println!("  {} {}", "runs after:".dimmed(), prerequisites.join(", "));
        } else {
            println!("  {}", "no prerequisites".dimmed());
        }
        println!();
    }

    Ok(())
}
