//! Chore Core Library
//!
//! This is the core library for the chore automation harness: a small,
//! declarative set of named tasks for the churn prediction project, each a
//! thin shell-out to an external tool, sequenced by an explicit dependency
//! graph.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`harness`] - High-level harness interface over the validated graph
//! - [`execution`] - Task execution engine with prerequisite resolution
//! - [`graph`] - Task graph construction, validation, and plan resolution
//! - [`catalog`] - Built-in task declarations
//! - [`configs`] - Configuration parsing for the `chore.yml` override file
//! - [`colors`] - Stable terminal colors for task labels
//! - [`results`] - Result types for harness operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`Harness`] which provides a high-level
//! interface for all operations:
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
//! harness.run(&["all-tests".to_string()]).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod colors;
pub mod configs;
pub mod execution;
pub mod graph;
pub mod harness;
pub mod results;
pub mod types;

// Re-export the main types for easier usage
pub use harness::{Harness, HarnessConfig};
pub use types::{ChoreError, ChoreResult};
