use anyhow::Result;
use chore_core::Harness;
use colored::*;

pub async fn execute(harness: &Harness, tasks: &[String]) -> Result<()> {
    println!("{} {}", "Running".bold(), tasks.join(", ").cyan());

    // Propagate the error unchanged so main can surface the real exit code
    harness.run(tasks).await?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All tasks completed successfully!".green().bold()
    );

    Ok(())
}
