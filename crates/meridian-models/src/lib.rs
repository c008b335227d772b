//! Shared data model for the Meridian orchestration engine.
//!
//! This crate defines the directive, task, plan, and result types exchanged
//! between the mission planner and the executor agent. It carries no
//! behavior beyond constructors and small accessors; all lifecycle rules
//! live in `meridian-core`.

pub mod diff;
pub mod directive;
pub mod plan;
pub mod result;
pub mod task;

pub use diff::{ChangeKind, DiffChange, DiffResult};
pub use directive::{MissionCategory, MissionDirective, MissionStatus, NewMissionDirective, Priority};
pub use plan::{Checkpoint, CheckpointStatus, ExecutionPlan, MissionPhase, ResourceAllocation};
pub use result::{
    ArtifactKind, ExecutionStatus, MissionMetrics, MissionOutcome, MissionResult, TaskArtifact,
    TaskExecutionResult, TaskMetrics, TaskOutput,
};
pub use task::{DependencyKind, MissionTask, TaskDependency, TaskResources, TaskStatus, TaskType};
