//! Priority scheduling for mission tasks.
//!
//! Selects the next task an agent should pick up. A task is eligible when it
//! is pending, every dependency has completed, and it is either unassigned or
//! already assigned to the requesting agent.

use meridian_models::{MissionTask, TaskStatus};
use std::collections::HashMap;

/// Picks the highest-priority eligible task for an agent.
///
/// Ties on priority break toward the shorter estimated duration.
#[must_use]
pub fn select_next_task<'a>(tasks: &'a [MissionTask], agent_id: &str) -> Option<&'a MissionTask> {
    let status_by_id: HashMap<&str, TaskStatus> =
        tasks.iter().map(|t| (t.id.as_str(), t.status)).collect();

    tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Pending)
        .filter(|t| {
            t.dependencies.iter().all(|dep| {
                status_by_id.get(dep.as_str()) == Some(&TaskStatus::Completed)
            })
        })
        .filter(|t| match &t.assigned_agent {
            None => true,
            Some(owner) => owner == agent_id,
        })
        .min_by(|a, b| {
            b.priority
                .rank()
                .cmp(&a.priority.rank())
                .then(a.estimated_duration_mins.cmp(&b.estimated_duration_mins))
        })
}
