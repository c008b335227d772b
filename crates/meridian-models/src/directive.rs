//! Mission directives: the high-level requests the planner decomposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority of a mission or task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Background work, scheduled last.
    Low,
    /// Default priority.
    Medium,
    /// Time-sensitive work.
    High,
    /// Blocking work, scheduled first.
    Critical,
}

impl Priority {
    /// Numeric rank used for dispatch ordering (higher = more urgent).
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }

    /// Combines a mission priority with a template priority, taking the
    /// more urgent of the two.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Category of a mission directive, used to select task templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionCategory {
    /// Feature or fix implementation work.
    Development,
    /// Dedicated test campaigns.
    Testing,
    /// Release and environment work.
    Deployment,
    /// Upkeep: docs, reviews, housekeeping.
    Maintenance,
    /// Investigation and analysis work.
    Research,
}

impl std::fmt::Display for MissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Deployment => "deployment",
            Self::Maintenance => "maintenance",
            Self::Research => "research",
        };
        f.write_str(s)
    }
}

/// Lifecycle status of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    /// Created but not yet planned.
    Pending,
    /// Decomposition in progress.
    Planning,
    /// Planned; tasks are dispatchable.
    Active,
    /// Dispatch suspended by an operator.
    Paused,
    /// All tasks finished successfully.
    Completed,
    /// Planning or execution failed.
    Failed,
}

/// Input for creating a mission: everything the caller supplies before the
/// planner assigns an id, timestamps, and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMissionDirective {
    /// Short human-readable title.
    pub title: String,
    /// Free-text description; scanned by the requirement extractor.
    pub description: String,
    /// Mission priority, inherited by decomposed tasks.
    pub priority: Priority,
    /// Category driving template selection.
    pub category: MissionCategory,
    /// Constraints carried into task metadata.
    #[serde(default)]
    pub constraints: Vec<String>,
    /// Criteria for judging mission success.
    #[serde(default)]
    pub success_criteria: Vec<String>,
    /// Estimated effort in hours; must be positive.
    pub estimated_effort_hours: f64,
    /// Optional hard deadline.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Mission ids this mission depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Free-form tags carried into task metadata.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A mission directive owned by the planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionDirective {
    /// Unique id (`mission-<uuid>`).
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: MissionCategory,
    pub constraints: Vec<String>,
    pub success_criteria: Vec<String>,
    pub estimated_effort_hours: f64,
    pub deadline: Option<DateTime<Utc>>,
    /// Mission ids this mission depends on.
    pub dependencies: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: MissionStatus,
}

impl MissionDirective {
    /// Materializes a stored directive from caller input, assigning a fresh
    /// id, timestamps, and `Pending` status.
    #[must_use]
    pub fn from_new(new: NewMissionDirective) -> Self {
        let now = Utc::now();
        Self {
            id: format!("mission-{}", Uuid::new_v4()),
            title: new.title,
            description: new.description,
            priority: new.priority,
            category: new.category,
            constraints: new.constraints,
            success_criteria: new.success_criteria,
            estimated_effort_hours: new.estimated_effort_hours,
            deadline: new.deadline,
            dependencies: new.dependencies,
            tags: new.tags,
            created_at: now,
            updated_at: now,
            status: MissionStatus::Pending,
        }
    }
}
