use thiserror::Error;

/// The main error type for chore operations
#[derive(Debug, Error)]
pub enum ChoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown task '{0}'")]
    UnknownTask(String),

    #[error("Circular dependency detected: {0}")]
    CyclicDependency(String),

    #[error("Failed to launch command for task '{task}': {source}")]
    Launch {
        task: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Task '{task}' failed with exit code {code}")]
    CommandFailed { task: String, code: i32 },
}

/// Result type alias for chore operations
pub type ChoreResult<T> = Result<T, ChoreError>;
