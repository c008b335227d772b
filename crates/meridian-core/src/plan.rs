//! Execution plan construction.
//!
//! Groups a mission's tasks into logical phases, wires phase dependencies,
//! identifies the critical path, and attaches resource allocations and
//! validation checkpoints.

use chrono::Utc;
use meridian_models::{
    Checkpoint, CheckpointStatus, ExecutionPlan, MissionPhase, MissionTask, Priority,
    ResourceAllocation, TaskType,
};

/// Maps a task type to its phase key.
#[must_use]
pub fn phase_key(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::Code => "development",
        TaskType::Test | TaskType::Review => "validation",
        TaskType::Deploy => "deployment",
        TaskType::Research => "analysis",
        TaskType::Documentation => "documentation",
    }
}

fn phase_name(key: &str) -> &'static str {
    match key {
        "analysis" => "Analysis Phase",
        "validation" => "Validation Phase",
        "deployment" => "Deployment Phase",
        "documentation" => "Documentation Phase",
        _ => "Development Phase",
    }
}

fn phase_prerequisites(key: &str) -> &'static [&'static str] {
    match key {
        "development" => &["analysis"],
        "validation" => &["development"],
        "deployment" => &["validation"],
        "documentation" => &["development"],
        _ => &[],
    }
}

fn phase_is_critical(key: &str) -> bool {
    matches!(key, "development" | "validation")
}

/// Formats a minute count as a human-readable duration, e.g. "2h 30m".
#[must_use]
pub fn humanize_duration(total_minutes: u32) -> String {
    if total_minutes < 60 {
        format!("{total_minutes}m")
    } else {
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    }
}

fn resource_classes(task_type: TaskType) -> &'static [&'static str] {
    match task_type {
        TaskType::Code => &["cpu", "memory", "storage", "network"],
        TaskType::Test => &["cpu", "memory", "test_environment"],
        TaskType::Deploy => &["cpu", "memory", "deployment_tools"],
        TaskType::Review => &["cpu", "memory", "review_tools"],
        TaskType::Research => &["cpu", "memory", "data_access"],
        TaskType::Documentation => &["cpu", "memory", "documentation_tools"],
    }
}

fn cost_multiplier(task_type: TaskType) -> f64 {
    match task_type {
        TaskType::Code => 1.2,
        TaskType::Test => 0.9,
        TaskType::Deploy => 1.1,
        TaskType::Review => 0.8,
        TaskType::Research => 1.0,
        TaskType::Documentation => 0.7,
    }
}

/// Estimates a task's cost in abstract cost units.
///
/// One unit per hour of estimated duration, scaled by a type multiplier.
#[must_use]
pub fn estimate_task_cost(task: &MissionTask) -> f64 {
    let duration_hours = f64::from(task.estimated_duration_mins) / 60.0;
    duration_hours * cost_multiplier(task.task_type)
}

fn checkpoint_criteria(task_type: TaskType) -> &'static [&'static str] {
    match task_type {
        TaskType::Code => &["code_complete", "tests_passing", "documentation_updated"],
        TaskType::Test => &[
            "test_coverage_adequate",
            "all_tests_passing",
            "performance_acceptable",
        ],
        TaskType::Deploy => &[
            "deployment_successful",
            "health_checks_passing",
            "monitoring_active",
        ],
        TaskType::Review => &["review_complete", "feedback_addressed", "approval_granted"],
        TaskType::Research => &[
            "research_complete",
            "findings_documented",
            "recommendations_clear",
        ],
        TaskType::Documentation => &[
            "documentation_complete",
            "reviewed_approved",
            "published_accessible",
        ],
    }
}

/// Builds the full execution plan for a mission's tasks.
#[must_use]
pub fn build_execution_plan(mission_id: &str, tasks: &[MissionTask]) -> ExecutionPlan {
    ExecutionPlan {
        mission_id: mission_id.to_string(),
        phases: group_into_phases(tasks),
        critical_path: tasks
            .iter()
            .filter(|t| matches!(t.priority, Priority::High | Priority::Critical))
            .map(|t| t.id.clone())
            .collect(),
        estimated_duration: humanize_duration(
            tasks.iter().map(|t| t.estimated_duration_mins).sum(),
        ),
        resource_allocations: tasks
            .iter()
            .map(|t| ResourceAllocation {
                task_id: t.id.clone(),
                resources: resource_classes(t.task_type)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
                estimated_cost: estimate_task_cost(t),
                allocated_at: Utc::now(),
            })
            .collect(),
        checkpoints: tasks
            .iter()
            .map(|t| Checkpoint {
                id: format!("checkpoint-{}", t.id),
                task_id: t.id.clone(),
                criteria: checkpoint_criteria(t.task_type)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
                status: CheckpointStatus::Pending,
                completed_at: None,
            })
            .collect(),
    }
}

/// Groups tasks into phases by type, preserving first-appearance order, and
/// wires phase dependencies (development after analysis, validation after
/// development, deployment after validation, documentation after development).
fn group_into_phases(tasks: &[MissionTask]) -> Vec<MissionPhase> {
    let mut groups: Vec<(&'static str, Vec<&MissionTask>)> = Vec::new();
    for task in tasks {
        let key = phase_key(task.task_type);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(task),
            None => groups.push((key, vec![task])),
        }
    }

    let phase_ids: Vec<(&'static str, String)> = groups
        .iter()
        .enumerate()
        .map(|(i, (key, _))| (*key, format!("phase-{i}")))
        .collect();
    let id_for = |key: &str| -> Option<String> {
        phase_ids.iter().find(|(k, _)| *k == key).map(|(_, id)| id.clone())
    };

    groups
        .iter()
        .enumerate()
        .map(|(i, (key, members))| MissionPhase {
            id: format!("phase-{i}"),
            name: phase_name(key).to_string(),
            description: format!("Phase for {key} tasks"),
            task_ids: members.iter().map(|t| t.id.clone()).collect(),
            dependencies: phase_prerequisites(key)
                .iter()
                .filter_map(|dep| id_for(dep))
                .collect(),
            estimated_duration: humanize_duration(
                members.iter().map(|t| t.estimated_duration_mins).sum(),
            ),
            critical_path: phase_is_critical(key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(task_type: TaskType, priority: Priority, duration: u32) -> MissionTask {
        MissionTask::new("mission-1", "t", "d", task_type, priority, duration)
    }

    #[test]
    fn test_humanize_duration() {
        assert_eq!(humanize_duration(45), "45m");
        assert_eq!(humanize_duration(60), "1h");
        assert_eq!(humanize_duration(150), "2h 30m");
    }

    #[test]
    fn test_phases_group_by_type() {
        let tasks = vec![
            task(TaskType::Code, Priority::High, 120),
            task(TaskType::Test, Priority::High, 60),
            task(TaskType::Review, Priority::Medium, 30),
        ];

        let plan = build_execution_plan("mission-1", &tasks);
        assert_eq!(plan.phases.len(), 2);

        let validation = plan
            .phases
            .iter()
            .find(|p| p.name == "Validation Phase")
            .unwrap();
        assert_eq!(validation.task_ids.len(), 2);
        assert_eq!(validation.estimated_duration, "1h 30m");
        assert!(validation.critical_path);
    }

    #[test]
    fn test_validation_phase_depends_on_development() {
        let tasks = vec![
            task(TaskType::Code, Priority::Medium, 60),
            task(TaskType::Test, Priority::Medium, 60),
        ];

        let plan = build_execution_plan("m", &tasks);
        let development = plan
            .phases
            .iter()
            .find(|p| p.name == "Development Phase")
            .unwrap();
        let validation = plan
            .phases
            .iter()
            .find(|p| p.name == "Validation Phase")
            .unwrap();

        assert_eq!(validation.dependencies, vec![development.id.clone()]);
        assert!(development.dependencies.is_empty());
    }

    #[test]
    fn test_critical_path_collects_high_and_critical_tasks() {
        let tasks = vec![
            task(TaskType::Code, Priority::High, 60),
            task(TaskType::Deploy, Priority::Critical, 90),
            task(TaskType::Documentation, Priority::Low, 30),
        ];

        let plan = build_execution_plan("m", &tasks);
        assert_eq!(plan.critical_path.len(), 2);
        assert!(plan.critical_path.contains(&tasks[0].id));
        assert!(plan.critical_path.contains(&tasks[1].id));
    }

    #[test]
    fn test_checkpoints_carry_type_criteria() {
        let tasks = vec![task(TaskType::Deploy, Priority::Critical, 90)];
        let plan = build_execution_plan("m", &tasks);

        assert_eq!(plan.checkpoints.len(), 1);
        let cp = &plan.checkpoints[0];
        assert_eq!(cp.task_id, tasks[0].id);
        assert_eq!(cp.status, CheckpointStatus::Pending);
        assert!(cp.criteria.contains(&"health_checks_passing".to_string()));
    }

    #[test]
    fn test_cost_scales_with_duration_and_type() {
        let code = task(TaskType::Code, Priority::Medium, 120);
        let docs = task(TaskType::Documentation, Priority::Medium, 120);

        assert!((estimate_task_cost(&code) - 2.4).abs() < f64::EPSILON);
        assert!((estimate_task_cost(&docs) - 1.4).abs() < 1e-9);
    }
}
