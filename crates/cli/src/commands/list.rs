use anyhow::Result;
use chore_core::Harness;
use colored::*;

pub fn execute(harness: &Harness) -> Result<()> {
    println!("{}", "Tasks".bold().underline());

    let result = harness.list_tasks();

    if result.tasks.is_empty() {
        println!("  {}", "No tasks declared".dimmed());
        return Ok(());
    }

    for task in &result.tasks {
        let color = result
            .task_colors
            .get(&task.name)
            .copied()
            .unwrap_or(Color::White);

        let label = if task.is_aggregate {
            format!("{} {}", task.name.color(color).bold(), "[aggregate]".dimmed())
        } else {
            task.name.color(color).bold().to_string()
        };
        println!("{}", label);

        if let Some(description) = &task.description {
            println!("  {}", description.dimmed());
        }
        if !task.prerequisites.is_empty() {
            println!(
                "  {} {}",
                "after:".bright_black(),
                task.prerequisites.join(", ")
            );
        }
    }

    Ok(())
}
