//! Configuration parsing for the task catalog
//!
//! Tasks are declared statically in [`crate::catalog`]; a `chore.yml` file at
//! the harness root may override or extend those declarations.

pub mod tasks;

pub use tasks::{parse_tasks_config, Command, TaskConfig, TasksFileConfig};
