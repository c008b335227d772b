// Error types for task execution

use std::time::Duration;
use thiserror::Error;

/// Result type for execution operations.
pub type Result<T> = std::result::Result<T, ExecutionError>;

/// Errors raised while executing a task.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A resource class the task type needs is not available.
    #[error("required resource not available: {0}")]
    ResourceUnavailable(String),

    /// A tool the task type needs is not registered.
    #[error("required tool not available: {0}")]
    ToolUnavailable(String),

    /// A tool invocation returned an error.
    #[error("tool {tool} failed: {reason}")]
    ToolFailed { tool: String, reason: String },

    /// A tool invocation exceeded its time budget.
    #[error("tool {tool} timed out after {timeout:?}")]
    ToolTimeout { tool: String, timeout: Duration },

    /// A tool produced output missing its required fields.
    #[error("invalid output from tool {tool}: {reason}")]
    InvalidToolOutput { tool: String, reason: String },

    /// Policy evaluation denied the operation.
    #[error("policy violation: {0:?}")]
    PolicyViolation(Vec<String>),

    /// Change tracking failed.
    #[error("diff generation failed: {0}")]
    Diff(String),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_unavailable_names_the_tool() {
        let err = ExecutionError::ToolUnavailable("github".to_string());
        assert!(format!("{err}").contains("github"));
    }

    #[test]
    fn test_timeout_carries_duration() {
        let err = ExecutionError::ToolTimeout {
            tool: "test-runner".to_string(),
            timeout: Duration::from_secs(30),
        };
        let msg = format!("{err}");
        assert!(msg.contains("test-runner"));
        assert!(msg.contains("30"));
    }
}
