//! Policy evaluation for tool invocations.
//!
//! The executor consults a `PolicyEvaluator` before every tool call. A
//! denied decision is a hard stop for the task.

use async_trait::async_trait;
use meridian_models::MissionTask;

use crate::tool::ToolRequest;

/// Outcome of a policy evaluation.
#[derive(Debug, Clone)]
pub struct PolicyDecision {
    pub allowed: bool,
    /// Violations explaining a denial; empty when allowed.
    pub violations: Vec<String>,
}

impl PolicyDecision {
    /// An allowing decision with no violations.
    #[must_use]
    pub fn allow() -> Self {
        Self { allowed: true, violations: Vec::new() }
    }

    /// A denying decision with the given violations.
    #[must_use]
    pub fn deny(violations: Vec<String>) -> Self {
        Self { allowed: false, violations }
    }
}

/// Evaluates whether a tool call is permitted for a task.
#[async_trait]
pub trait PolicyEvaluator: Send + Sync {
    /// Evaluates the file, network, and content rules for one tool call.
    async fn evaluate(&self, task: &MissionTask, request: &ToolRequest) -> PolicyDecision;
}

/// Default policy: everything is permitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAllPolicy;

#[async_trait]
impl PolicyEvaluator for AllowAllPolicy {
    async fn evaluate(&self, _task: &MissionTask, _request: &ToolRequest) -> PolicyDecision {
        PolicyDecision::allow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_models::{Priority, TaskType};

    #[tokio::test]
    async fn test_allow_all_permits_everything() {
        let task = MissionTask::new("m", "t", "d", TaskType::Code, Priority::High, 60);
        let request = ToolRequest::for_task(&task, "agent-1");

        let decision = AllowAllPolicy.evaluate(&task, &request).await;
        assert!(decision.allowed);
        assert!(decision.violations.is_empty());
    }
}
