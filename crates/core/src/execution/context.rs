//! Per-invocation execution state

use std::collections::HashSet;

use crate::types::{ChoreError, ChoreResult};

/// Record of which tasks have run in the current invocation
///
/// Created fresh per invocation and passed explicitly through resolution, so
/// separate runs never share state. The resolution stack doubles as the cycle
/// guard: revisiting a task that is still being resolved means the
/// prerequisite relation loops.
#[derive(Debug, Default)]
pub struct ExecutionRecord {
    completed: HashSet<String>,
    stack: Vec<String>,
}

impl ExecutionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, name: &str) -> bool {
        self.completed.contains(name)
    }

    /// Mark a task as being resolved, failing if it is already on the stack
    pub fn begin(&mut self, name: &str) -> ChoreResult<()> {
        if self.stack.iter().any(|entry| entry == name) {
            let mut path = self.stack.clone();
            path.push(name.to_string());
            return Err(ChoreError::CyclicDependency(path.join(" -> ")));
        }
        self.stack.push(name.to_string());
        Ok(())
    }

    /// Mark the task at the top of the stack as completed
    pub fn finish(&mut self, name: &str) {
        self.stack.pop();
        self.completed.insert(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_tasks_are_remembered() {
        let mut record = ExecutionRecord::new();
        assert!(!record.is_completed("tests"));

        record.begin("tests").unwrap();
        record.finish("tests");
        assert!(record.is_completed("tests"));
    }

    #[test]
    fn revisiting_an_in_progress_task_reports_the_path() {
        let mut record = ExecutionRecord::new();
        record.begin("a").unwrap();
        record.begin("b").unwrap();

        let err = record.begin("a").unwrap_err();
        assert!(err.to_string().contains("a -> b -> a"));
    }
}
