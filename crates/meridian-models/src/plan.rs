//! Execution plans: phased, resource-annotated views over a mission's tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logical phase grouping tasks of related types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionPhase {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ids of the tasks in this phase.
    pub task_ids: Vec<String>,
    /// Ids of phases that must complete first.
    pub dependencies: Vec<String>,
    /// Humanized duration estimate, e.g. "2h 30m".
    pub estimated_duration: String,
    /// Whether the phase sits on the mission's critical path.
    pub critical_path: bool,
}

/// Resources allocated to a single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceAllocation {
    pub task_id: String,
    /// Resource class names (cpu, memory, ...).
    pub resources: Vec<String>,
    /// Cost estimate in abstract cost units.
    pub estimated_cost: f64,
    pub allocated_at: DateTime<Utc>,
}

/// Status of a validation checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointStatus {
    Pending,
    Passed,
    Failed,
}

/// A validation checkpoint attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: String,
    pub task_id: String,
    /// Criteria that must hold for the checkpoint to pass.
    pub criteria: Vec<String>,
    pub status: CheckpointStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

/// A full execution plan for one mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub mission_id: String,
    pub phases: Vec<MissionPhase>,
    /// Task ids whose priority marks them as blocking overall completion.
    pub critical_path: Vec<String>,
    /// Humanized aggregate duration estimate.
    pub estimated_duration: String,
    pub resource_allocations: Vec<ResourceAllocation>,
    pub checkpoints: Vec<Checkpoint>,
}
