use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ChoreResult;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Command {
    /// A shell command line, run through `sh -c`
    Shell(String),
    /// An executable and its arguments, run directly
    Argv(Vec<String>),
}

impl Command {
    /// The command as a single display line, for echoing before execution
    pub fn display_line(&self) -> String {
        match self {
            Command::Shell(line) => line.clone(),
            Command::Argv(argv) => argv.join(" "),
        }
    }
}

#[derive(Deserialize, Serialize, JsonSchema, Clone, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    pub description: Option<String>,
    pub command: Option<Command>,
    pub dependencies: Option<Vec<String>>,
    /// Phony tasks always run when reached; a non-phony task is skipped when
    /// an artifact named after it already exists. Defaults to true: every
    /// built-in task delegates to an external tool and owns no artifact.
    pub phony: Option<bool>,
}

impl TaskConfig {
    /// An aggregate task has no command of its own, only prerequisites
    pub fn is_aggregate(&self) -> bool {
        self.command.is_none()
    }

    pub fn is_phony(&self) -> bool {
        self.phony.unwrap_or(true)
    }

    pub fn prerequisites(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or(&[])
    }
}

#[derive(Deserialize, Serialize, JsonSchema, Clone, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TasksFileConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tasks: Vec<TaskConfig>,
}

pub fn parse_tasks_config(yaml_str: &str) -> ChoreResult<TasksFileConfig> {
    let config: TasksFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shell_and_argv_commands() {
        let yaml = r#"
tasks:
  - name: lint
    description: Check formatting
    command: poetry run black --check .
  - name: echo
    command: ["echo", "hello"]
"#;
        let config = parse_tasks_config(yaml).unwrap();
        assert_eq!(config.tasks.len(), 2);
        assert!(matches!(config.tasks[0].command, Some(Command::Shell(_))));
        assert!(matches!(config.tasks[1].command, Some(Command::Argv(_))));
        assert_eq!(config.tasks[1].command.as_ref().unwrap().display_line(), "echo hello");
    }

    #[test]
    fn aggregate_task_has_no_command() {
        let yaml = r#"
tasks:
  - name: all-checks
    dependencies: [lint, typecheck]
"#;
        let config = parse_tasks_config(yaml).unwrap();
        let task = &config.tasks[0];
        assert!(task.is_aggregate());
        assert!(task.is_phony(), "tasks default to phony");
        assert_eq!(task.prerequisites(), ["lint", "typecheck"]);
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = r#"
tasks:
  - name: lint
    shellCommand: black .
"#;
        assert!(parse_tasks_config(yaml).is_err());
    }
}
