use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use chore_core::{ChoreError, Harness, HarnessConfig};
use colored::*;

mod commands;

/// Chore - task automation for the churn prediction project
#[derive(Parser)]
#[command(name = "chore")]
#[command(about = "A task automation harness for the churn prediction project")]
#[command(version)]
struct Cli {
    /// Path to the project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more tasks with their prerequisites
    Run {
        /// Task names, executed in the given order
        #[arg(required = true)]
        tasks: Vec<String>,
    },
    /// Show the resolved execution order without running anything
    Plan {
        /// Task names to resolve
        #[arg(required = true)]
        tasks: Vec<String>,
    },
    /// List the declared tasks
    List,
    /// Show the task dependency graph
    Graph,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), error);
        std::process::exit(exit_code_for(&error));
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the harness; the task graph is validated here
    let harness = Harness::new(HarnessConfig { root: cli.root })?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::Run { tasks } => commands::run::execute(&harness, &tasks).await,
        Commands::Plan { tasks } => commands::plan::execute(&harness, &tasks),
        Commands::List => commands::list::execute(&harness),
        Commands::Graph => commands::graph::execute(&harness),
    }
}

/// A failing delegated command propagates its own exit code; everything else is 1
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ChoreError>() {
        Some(ChoreError::CommandFailed { code, .. }) if *code > 0 => *code,
        _ => 1,
    }
}
