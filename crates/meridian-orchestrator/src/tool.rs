//! The tool abstraction the executor dispatches work through.
//!
//! Tools are named, async, and pluggable. The registry maps tool names to
//! implementations; tasks declare which tools they need by type.

use async_trait::async_trait;
use meridian_models::{MissionTask, Priority, TaskType};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ExecutionError, Result};

/// Everything a tool gets to see about the task it is invoked for.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub task_id: String,
    pub task_type: TaskType,
    pub description: String,
    pub priority: Priority,
    pub agent_id: String,
    /// Repository under work, when the execution context names one.
    pub repository: Option<String>,
    /// Branch under work, when the execution context names one.
    pub branch: Option<String>,
    /// Permissions granted to the task.
    pub permissions: Vec<String>,
}

impl ToolRequest {
    /// Builds a request from a task, inheriting its permissions.
    #[must_use]
    pub fn for_task(task: &MissionTask, agent_id: &str) -> Self {
        Self {
            task_id: task.id.clone(),
            task_type: task.task_type,
            description: task.description.clone(),
            priority: task.priority,
            agent_id: agent_id.to_string(),
            repository: None,
            branch: None,
            permissions: task.resources.permissions.clone(),
        }
    }

    /// Sets the repository context.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Sets the branch context.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// Structured output from one tool invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Primary result payload.
    pub result: Value,
    /// Log lines emitted during the call.
    pub logs: Vec<String>,
    /// Metadata about the call.
    pub metadata: HashMap<String, Value>,
}

impl ToolOutput {
    /// Builds an output with just a result payload.
    #[must_use]
    pub fn from_result(result: Value) -> Self {
        Self { result, logs: Vec::new(), metadata: HashMap::new() }
    }

    /// Whether the output carries nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_null() && self.logs.is_empty() && self.metadata.is_empty()
    }
}

/// An executable capability the executor can invoke for a task.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The registry name of this tool.
    fn name(&self) -> &str;

    /// Runs the tool for a request.
    async fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput>;
}

/// Named collection of tools available to the executor.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under its own name, replacing any previous entry.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Whether a tool is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of all registered tools.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

/// Validates a tool's output against its per-tool schema.
///
/// Empty output is always invalid. Some tools carry required result fields:
/// `github` must name the repository and branch, `code-analysis` must carry
/// analysis and recommendations, `test-runner` must carry test results and
/// coverage.
///
/// # Errors
/// Returns `InvalidToolOutput` naming the tool and the missing field.
pub fn validate_output(tool_name: &str, output: &ToolOutput) -> Result<()> {
    if output.is_empty() {
        return Err(ExecutionError::InvalidToolOutput {
            tool: tool_name.to_string(),
            reason: "empty output".to_string(),
        });
    }

    let required: &[&str] = match tool_name {
        "github" => &["repository", "branch"],
        "code-analysis" => &["analysis", "recommendations"],
        "test-runner" => &["test_results", "coverage"],
        _ => &[],
    };

    for field in required {
        if output.result.get(field).is_none() {
            return Err(ExecutionError::InvalidToolOutput {
                tool: tool_name.to_string(),
                reason: format!("missing required field: {field}"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        async fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput> {
            Ok(ToolOutput::from_result(json!({"echo": request.description})))
        }
    }

    #[tokio::test]
    async fn test_registry_lookup_and_invoke() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        assert!(registry.contains("echo"));
        assert!(!registry.contains("github"));

        let task = MissionTask::new("m", "t", "say hi", TaskType::Code, Priority::Low, 10);
        let request = ToolRequest::for_task(&task, "agent-1");
        let output = registry.get("echo").unwrap().invoke(&request).await.unwrap();
        assert_eq!(output.result["echo"], json!("say hi"));
    }

    #[test]
    fn test_empty_output_is_invalid() {
        let err = validate_output("echo", &ToolOutput::default()).unwrap_err();
        assert!(matches!(err, ExecutionError::InvalidToolOutput { .. }));
    }

    #[test]
    fn test_github_schema_requires_repository_and_branch() {
        let incomplete = ToolOutput::from_result(json!({"repository": "meridian"}));
        let err = validate_output("github", &incomplete).unwrap_err();
        assert!(format!("{err}").contains("branch"));

        let complete =
            ToolOutput::from_result(json!({"repository": "meridian", "branch": "main"}));
        assert!(validate_output("github", &complete).is_ok());
    }

    #[test]
    fn test_unknown_tools_only_need_nonempty_output() {
        let output = ToolOutput::from_result(json!({"anything": 1}));
        assert!(validate_output("mystery", &output).is_ok());
    }
}
