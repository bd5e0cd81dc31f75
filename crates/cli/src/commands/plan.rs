use anyhow::Result;
use chore_core::Harness;
use colored::*;

pub fn execute(harness: &Harness, tasks: &[String]) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), tasks.join(", ").cyan());

    let plan = harness
        .plan(tasks)
        .map_err(|e| anyhow::anyhow!("Failed to resolve execution plan: {}", e))?;

    println!("\n{}:", "Execution order".bold());
    for (i, task) in plan.order.iter().enumerate() {
        println!("  {}. {}", i + 1, task);
    }

    Ok(())
}
