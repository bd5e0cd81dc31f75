//! Task execution module
//!
//! This module handles the actual execution of tasks: depth-first
//! prerequisite resolution, at-most-once bookkeeping, and delegation of each
//! task's command to the operating system.

pub mod command;
pub mod context;
pub mod runner;

pub use command::{CommandExecutor, StepExecutor};
pub use context::ExecutionRecord;
pub use runner::TaskRunner;
