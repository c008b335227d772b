//! Per-task execution results and mission-level aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Outcome of a single task execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failed,
    Partial,
}

/// Structured output produced by executing one task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskOutput {
    /// Primary result payload; `Null` when the task produced none.
    #[serde(default)]
    pub result: Value,
    /// Log lines, concatenated in call order across tools.
    #[serde(default)]
    pub logs: Vec<String>,
    /// Shallow-merged metadata from all tool outputs.
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// Kind of artifact a task produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    File,
    Data,
    Report,
    Code,
}

/// A durable output produced by a completed task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskArtifact {
    pub id: String,
    pub kind: ArtifactKind,
    pub name: String,
    pub content: Value,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// Execution metrics for one task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskMetrics {
    pub execution_time_ms: u64,
    pub memory_usage: f64,
    pub cpu_usage: f64,
    /// Fraction of tool calls that succeeded, in [0, 100].
    pub success_rate: f64,
    /// Quality assessment in [0, 100].
    pub quality_score: f64,
}

/// Result of executing one `MissionTask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskExecutionResult {
    pub task_id: String,
    pub status: ExecutionStatus,
    pub duration_ms: u64,
    pub output: TaskOutput,
    pub artifacts: Vec<TaskArtifact>,
    pub metrics: TaskMetrics,
    pub error: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl TaskExecutionResult {
    /// Builds a failed result with zeroed metrics and the given error
    /// message. Used when execution aborts before producing output.
    #[must_use]
    pub fn failed(task_id: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            task_id: task_id.into(),
            status: ExecutionStatus::Failed,
            duration_ms,
            output: TaskOutput::default(),
            artifacts: Vec::new(),
            metrics: TaskMetrics::default(),
            error: Some(error.into()),
            completed_at: Utc::now(),
        }
    }
}

/// Overall outcome of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionOutcome {
    Completed,
    Failed,
    Partial,
}

/// Composite metrics over a mission's task results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionMetrics {
    /// Percentage of tasks that succeeded, in [0, 100].
    pub overall_success: f64,
    /// Mean quality score across all results.
    pub average_quality: f64,
    /// Total duration over total memory+cpu usage; 0 when no usage was
    /// reported.
    pub resource_efficiency: f64,
}

/// Aggregated result for one mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionResult {
    pub mission_id: String,
    pub status: MissionOutcome,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub failed_tasks: usize,
    pub total_duration_ms: u64,
    pub artifacts: Vec<TaskArtifact>,
    pub metrics: MissionMetrics,
    pub recommendations: Vec<String>,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_has_zeroed_metrics() {
        let result = TaskExecutionResult::failed("task-1", "tool missing", 42);
        assert_eq!(result.status, ExecutionStatus::Failed);
        assert_eq!(result.metrics, TaskMetrics::default());
        assert_eq!(result.error.as_deref(), Some("tool missing"));
        assert_eq!(result.duration_ms, 42);
        assert!(result.artifacts.is_empty());
    }

    #[test]
    fn test_task_output_default_is_null_result() {
        let output = TaskOutput::default();
        assert!(output.result.is_null());
        assert!(output.logs.is_empty());
        assert!(output.metadata.is_empty());
    }
}
