//! Mission tasks and the dependency edges between them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::directive::Priority;

/// The kind of work a task performs. Drives dependency sequencing, tool
/// selection, and readiness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Code,
    Test,
    Deploy,
    Review,
    Research,
    Documentation,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::Test => "test",
            Self::Deploy => "deploy",
            Self::Review => "review",
            Self::Research => "research",
            Self::Documentation => "documentation",
        };
        f.write_str(s)
    }
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Waiting for assignment.
    Pending,
    /// Assigned to an agent and running.
    InProgress,
    /// Held back by a failed or incomplete dependency.
    Blocked,
    /// Finished successfully. Terminal.
    Completed,
    /// Finished unsuccessfully. Terminal.
    Failed,
}

impl TaskStatus {
    /// Whether this status is terminal (no further transitions).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Resources a task needs before it can be dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResources {
    /// Tool names the executor must have registered.
    #[serde(default)]
    pub tools: Vec<String>,
    /// File globs the task touches.
    #[serde(default)]
    pub files: Vec<String>,
    /// External APIs the task calls.
    #[serde(default)]
    pub apis: Vec<String>,
    /// Permissions the task requires.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A single unit of executable work belonging to a mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionTask {
    /// Unique id (`task-<uuid>`).
    pub id: String,
    /// Owning mission id.
    pub mission_id: String,
    pub title: String,
    pub description: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Planner estimate, in minutes.
    pub estimated_duration_mins: u32,
    /// Wall-clock duration, set exactly once at completion.
    pub actual_duration_mins: Option<u32>,
    /// Exclusive assignment; `None` until an agent claims the task.
    pub assigned_agent: Option<String>,
    /// Ids of tasks that must complete before this one is eligible.
    pub dependencies: Vec<String>,
    pub resources: TaskResources,
    pub acceptance_criteria: Vec<String>,
    /// Completion percentage in [0, 100].
    pub progress: u8,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Last error reported for this task.
    pub error: Option<String>,
    /// Free-form metadata (category, tags, extractor annotations).
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl MissionTask {
    /// Creates a pending task for a mission with a fresh id.
    #[must_use]
    pub fn new(
        mission_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        task_type: TaskType,
        priority: Priority,
        estimated_duration_mins: u32,
    ) -> Self {
        Self {
            id: format!("task-{}", Uuid::new_v4()),
            mission_id: mission_id.into(),
            title: title.into(),
            description: description.into(),
            task_type,
            priority,
            status: TaskStatus::Pending,
            estimated_duration_mins,
            actual_duration_mins: None,
            assigned_agent: None,
            dependencies: Vec::new(),
            resources: TaskResources::default(),
            acceptance_criteria: Vec::new(),
            progress: 0,
            started_at: None,
            completed_at: None,
            error: None,
            metadata: HashMap::new(),
        }
    }

    /// Sets the required resources.
    #[must_use]
    pub fn with_resources(mut self, resources: TaskResources) -> Self {
        self.resources = resources;
        self
    }

    /// Sets the acceptance criteria.
    #[must_use]
    pub fn with_acceptance_criteria(mut self, criteria: Vec<String>) -> Self {
        self.acceptance_criteria = criteria;
        self
    }

    /// Inserts a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Kind of dependency edge between two tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Strict sequencing: the dependent cannot start until the dependency
    /// completes.
    Blocks,
    /// The dependent consumes the dependency's output.
    Requires,
    /// Advisory ordering hint.
    Suggests,
}

/// A directed dependency edge. Edges are data, stored per mission, so the
/// graph can be rebuilt or audited without traversing live task objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDependency {
    /// The dependent task.
    pub task_id: String,
    /// The task it depends on.
    pub depends_on: String,
    pub kind: DependencyKind,
    pub description: String,
}
