//! Pre-flight readiness checks.
//!
//! Before a task runs, the executor verifies that every resource class its
//! type implies is available and that every tool it needs is registered.
//! The first missing item fails the check and the task is never attempted.

use meridian_models::TaskType;

use crate::error::{ExecutionError, Result};
use crate::tool::ToolRegistry;

/// Resource classes a task type needs.
#[must_use]
pub fn required_resources(task_type: TaskType) -> &'static [&'static str] {
    match task_type {
        TaskType::Code => &["cpu", "memory", "storage", "network"],
        TaskType::Test => &["cpu", "memory", "test-environment"],
        TaskType::Deploy => &["cpu", "memory", "deployment-tools"],
        TaskType::Review => &["cpu", "memory", "review-tools"],
        TaskType::Research => &["cpu", "memory", "data-access"],
        TaskType::Documentation => &["cpu", "memory", "content-tools"],
    }
}

/// Tools a task type needs, in invocation order.
#[must_use]
pub fn required_tools(task_type: TaskType) -> &'static [&'static str] {
    match task_type {
        TaskType::Code => &["github", "code-analysis", "test-runner"],
        TaskType::Test => &["test-runner", "code-analysis"],
        TaskType::Deploy => &["github"],
        TaskType::Review => &["github", "code-analysis"],
        TaskType::Research => &["research"],
        TaskType::Documentation => &["docs-generator"],
    }
}

/// Verifies a task type can run against the available resources and tools.
///
/// # Errors
/// Returns `ResourceUnavailable` or `ToolUnavailable` naming the first
/// missing item.
pub fn check_readiness(
    task_type: TaskType,
    available_resources: &[String],
    registry: &ToolRegistry,
) -> Result<()> {
    for resource in required_resources(task_type) {
        if !available_resources.iter().any(|r| r == resource) {
            return Err(ExecutionError::ResourceUnavailable((*resource).to_string()));
        }
    }

    for tool in required_tools(task_type) {
        if !registry.contains(tool) {
            return Err(ExecutionError::ToolUnavailable((*tool).to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin_registry;

    fn all_resources() -> Vec<String> {
        [
            "cpu",
            "memory",
            "storage",
            "network",
            "test-environment",
            "deployment-tools",
            "review-tools",
            "data-access",
            "content-tools",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
    }

    #[test]
    fn test_every_type_passes_with_full_context() {
        let registry = builtin_registry();
        let resources = all_resources();
        for task_type in [
            TaskType::Code,
            TaskType::Test,
            TaskType::Deploy,
            TaskType::Review,
            TaskType::Research,
            TaskType::Documentation,
        ] {
            assert!(check_readiness(task_type, &resources, &registry).is_ok());
        }
    }

    #[test]
    fn test_missing_resource_named() {
        let registry = builtin_registry();
        let resources = vec!["cpu".to_string(), "memory".to_string()];

        let err = check_readiness(TaskType::Code, &resources, &registry).unwrap_err();
        match err {
            ExecutionError::ResourceUnavailable(name) => assert_eq!(name, "storage"),
            other => panic!("expected ResourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_tool_named() {
        let registry = ToolRegistry::new();
        let err = check_readiness(TaskType::Research, &all_resources(), &registry).unwrap_err();
        match err {
            ExecutionError::ToolUnavailable(name) => assert_eq!(name, "research"),
            other => panic!("expected ToolUnavailable, got {other:?}"),
        }
    }
}
