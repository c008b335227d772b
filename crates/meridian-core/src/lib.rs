//! Mission planning core for Meridian.
//!
//! Decomposes high-level directives into dependency-ordered tasks, schedules
//! them for dispatch to worker agents, and aggregates per-task outcomes into
//! mission-level results. The planner is the single writer over mission and
//! task state; everything else reads copies.

pub mod aggregate;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod plan;
pub mod planner;
pub mod scheduler;
pub mod templates;

pub use aggregate::{aggregate_results, MAX_TASKS_BEFORE_SPLIT, SLOW_TASK_THRESHOLD_MS};
pub use error::{GraphError, PlanError, Result};
pub use extractor::extract_requirements;
pub use graph::{build_dependency_edges, DependencyGraph};
pub use plan::build_execution_plan;
pub use planner::{MissionPlanner, PlannerStats};
pub use scheduler::select_next_task;
pub use templates::{templates_for_category, TaskTemplate};
