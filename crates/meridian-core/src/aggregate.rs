//! Mission-level result aggregation.
//!
//! Rolls the per-task execution results of a mission up into a single
//! `MissionResult` with composite metrics and follow-up recommendations.

use chrono::Utc;
use meridian_models::{
    ExecutionStatus, MissionMetrics, MissionOutcome, MissionResult, TaskArtifact,
    TaskExecutionResult,
};

/// Tasks slower than this trigger an optimization recommendation.
pub const SLOW_TASK_THRESHOLD_MS: u64 = 5_000;

/// Missions with more results than this are recommended for splitting.
pub const MAX_TASKS_BEFORE_SPLIT: usize = 10;

/// Aggregates task execution results into a mission result.
///
/// The mission counts as completed only when no task failed.
#[must_use]
pub fn aggregate_results(mission_id: &str, results: &[TaskExecutionResult]) -> MissionResult {
    let completed = results
        .iter()
        .filter(|r| r.status == ExecutionStatus::Success)
        .count();
    let failed = results
        .iter()
        .filter(|r| r.status == ExecutionStatus::Failed)
        .count();
    let total_duration_ms: u64 = results.iter().map(|r| r.duration_ms).sum();

    let overall_success = if results.is_empty() {
        0.0
    } else {
        completed as f64 / results.len() as f64 * 100.0
    };

    MissionResult {
        mission_id: mission_id.to_string(),
        status: if failed == 0 {
            MissionOutcome::Completed
        } else {
            MissionOutcome::Failed
        },
        total_tasks: results.len(),
        completed_tasks: completed,
        failed_tasks: failed,
        total_duration_ms,
        artifacts: collect_artifacts(results),
        metrics: MissionMetrics {
            overall_success,
            average_quality: average_quality(results),
            resource_efficiency: resource_efficiency(results),
        },
        recommendations: recommendations(results),
        completed_at: Utc::now(),
    }
}

fn collect_artifacts(results: &[TaskExecutionResult]) -> Vec<TaskArtifact> {
    results
        .iter()
        .flat_map(|r| r.artifacts.iter().cloned())
        .collect()
}

fn average_quality(results: &[TaskExecutionResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results.iter().map(|r| r.metrics.quality_score).sum();
    total / results.len() as f64
}

/// Total execution time over total memory and cpu usage. Zero when no
/// resource usage was reported.
fn resource_efficiency(results: &[TaskExecutionResult]) -> f64 {
    let total_time: u64 = results.iter().map(|r| r.duration_ms).sum();
    let total_usage: f64 = results
        .iter()
        .map(|r| r.metrics.memory_usage + r.metrics.cpu_usage)
        .sum();

    if total_usage == 0.0 {
        0.0
    } else {
        total_time as f64 / total_usage
    }
}

fn recommendations(results: &[TaskExecutionResult]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if results.iter().any(|r| r.status == ExecutionStatus::Failed) {
        recommendations.push("Review failed tasks and implement fixes".to_string());
        recommendations.push("Strengthen dependency management".to_string());
    }

    if results.iter().any(|r| r.duration_ms > SLOW_TASK_THRESHOLD_MS) {
        recommendations.push("Optimize slow task execution".to_string());
        recommendations
            .push("Consider parallel execution for independent tasks".to_string());
    }

    if results.len() > MAX_TASKS_BEFORE_SPLIT {
        recommendations
            .push("Consider breaking down complex missions into smaller directives".to_string());
    }

    recommendations
}
