//! The mission planner: decomposition, dependency wiring, and task lifecycle.
//!
//! `MissionPlanner` owns the mission and task stores behind `RwLock`s and is
//! the single writer over them. Read accessors hand out clones so callers
//! never hold a lock across await points.

use crate::error::{PlanError, Result};
use crate::extractor::extract_requirements;
use crate::graph::{build_dependency_edges, DependencyGraph};
use crate::plan;
use crate::scheduler::select_next_task;
use crate::templates::templates_for_category;
use chrono::Utc;
use meridian_models::{
    ExecutionPlan, MissionDirective, MissionStatus, MissionTask, NewMissionDirective,
    TaskDependency, TaskStatus,
};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Counters over the planner's stores.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlannerStats {
    pub total_missions: usize,
    pub active_missions: usize,
    pub completed_missions: usize,
    pub total_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    pub failed_tasks: usize,
}

/// Decomposes directives into dependency-ordered tasks and tracks their
/// lifecycle through assignment, progress, and completion.
pub struct MissionPlanner {
    missions: RwLock<HashMap<String, MissionDirective>>,
    tasks: RwLock<HashMap<String, MissionTask>>,
    /// Dependency edges, keyed by mission id.
    dependencies: RwLock<HashMap<String, Vec<TaskDependency>>>,
    /// Topological task order, keyed by mission id.
    task_order: RwLock<HashMap<String, Vec<String>>>,
}

impl MissionPlanner {
    /// Creates an empty planner.
    #[must_use]
    pub fn new() -> Self {
        Self {
            missions: RwLock::new(HashMap::new()),
            tasks: RwLock::new(HashMap::new()),
            dependencies: RwLock::new(HashMap::new()),
            task_order: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a mission from a directive and plans it immediately.
    ///
    /// # Errors
    /// Returns `PlanError::Validation` for an empty title or description or
    /// a non-positive effort estimate, and propagates planning failures. On
    /// planning failure the mission is stored as `Failed` with no tasks.
    pub async fn create_mission(&self, new: NewMissionDirective) -> Result<String> {
        if new.title.trim().is_empty() {
            return Err(PlanError::Validation("title is required".to_string()));
        }
        if new.description.trim().is_empty() {
            return Err(PlanError::Validation("description is required".to_string()));
        }
        if new.estimated_effort_hours <= 0.0 {
            return Err(PlanError::Validation(
                "estimated effort must be positive".to_string(),
            ));
        }

        let mission = MissionDirective::from_new(new);
        let mission_id = mission.id.clone();
        info!(
            mission_id = %mission_id,
            category = %mission.category,
            priority = %mission.priority,
            "mission created"
        );
        self.missions.write().await.insert(mission_id.clone(), mission);

        self.plan_mission(&mission_id).await?;
        Ok(mission_id)
    }

    /// Decomposes a mission into tasks and wires their dependencies.
    ///
    /// Moves the mission Pending→Planning→Active. A dependency cycle marks
    /// the mission `Failed`, persists no tasks, and re-raises the error.
    ///
    /// # Errors
    /// Returns `MissionNotFound` for an unknown id, and `Graph` errors from
    /// dependency validation.
    pub async fn plan_mission(&self, mission_id: &str) -> Result<()> {
        let directive = self
            .mission(mission_id)
            .await
            .ok_or_else(|| PlanError::MissionNotFound(mission_id.to_string()))?;

        self.set_mission_status(mission_id, MissionStatus::Planning).await?;

        let mut tasks = self.decompose(&directive);
        let edges = build_dependency_edges(&tasks);

        let graph = match DependencyGraph::from_tasks(&tasks, &edges) {
            Ok(graph) => graph,
            Err(err) => {
                warn!(mission_id = %mission_id, error = %err, "planning failed");
                self.set_mission_status(mission_id, MissionStatus::Failed).await?;
                return Err(err.into());
            }
        };
        let order = graph.topological_sort()?;

        for task in &mut tasks {
            task.dependencies = edges
                .iter()
                .filter(|e| e.task_id == task.id)
                .map(|e| e.depends_on.clone())
                .collect();
        }

        debug!(
            mission_id = %mission_id,
            task_count = tasks.len(),
            edge_count = edges.len(),
            "mission planned"
        );

        {
            let mut store = self.tasks.write().await;
            for task in tasks {
                store.insert(task.id.clone(), task);
            }
        }
        self.dependencies.write().await.insert(mission_id.to_string(), edges);
        self.task_order.write().await.insert(mission_id.to_string(), order);

        self.set_mission_status(mission_id, MissionStatus::Active).await
    }

    /// Builds the task set for a directive from category templates plus
    /// requirements extracted from its description.
    fn decompose(&self, directive: &MissionDirective) -> Vec<MissionTask> {
        let mut tasks = Vec::new();

        for template in templates_for_category(directive.category) {
            let task = MissionTask::new(
                &directive.id,
                template.title,
                template.description,
                template.task_type,
                template.priority.max(directive.priority),
                template.estimated_duration_mins,
            )
            .with_resources(template.resources())
            .with_acceptance_criteria(template.criteria())
            .with_metadata("category", serde_json::json!(directive.category.to_string()));
            tasks.push(task);
        }

        for requirement in extract_requirements(&directive.description) {
            let task = MissionTask::new(
                &directive.id,
                requirement.title,
                requirement.description,
                requirement.task_type,
                requirement.priority(directive.priority),
                requirement.complexity.duration_mins(),
            )
            .with_resources(requirement.resources.clone())
            .with_acceptance_criteria(requirement.criteria.clone())
            .with_metadata("source", serde_json::json!("requirement-extractor"));
            tasks.push(task);
        }

        tasks
    }

    /// Picks the next task an agent should work on, across active missions.
    pub async fn get_next_task(&self, agent_id: &str) -> Option<MissionTask> {
        let missions = self.missions.read().await;
        let tasks = self.tasks.read().await;

        let candidates: Vec<MissionTask> = tasks
            .values()
            .filter(|t| {
                missions
                    .get(&t.mission_id)
                    .is_some_and(|m| m.status == MissionStatus::Active)
            })
            .cloned()
            .collect();

        select_next_task(&candidates, agent_id).cloned()
    }

    /// Atomically claims a pending task for an agent.
    ///
    /// Returns `false` when the task is no longer pending; the caller lost
    /// the race or the task already ran.
    ///
    /// # Errors
    /// Returns `TaskNotFound` for an unknown id.
    pub async fn assign_task(&self, task_id: &str, agent_id: &str) -> Result<bool> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(task_id)
            .ok_or_else(|| PlanError::TaskNotFound(task_id.to_string()))?;

        if task.status != TaskStatus::Pending {
            return Ok(false);
        }

        task.assigned_agent = Some(agent_id.to_string());
        task.status = TaskStatus::InProgress;
        task.started_at = Some(Utc::now());
        task.progress = 0;
        info!(task_id = %task_id, agent_id = %agent_id, "task assigned");
        Ok(true)
    }

    /// Records progress and optionally a status transition for a task.
    ///
    /// Progress is clamped to 100. Completion stamps `completed_at` and the
    /// actual duration exactly once.
    ///
    /// # Errors
    /// Returns `TaskNotFound` for an unknown id and `Validation` when the
    /// task is already in a terminal state or the requested status is
    /// `InProgress` or `Pending` (those transitions go through
    /// `assign_task` and `abandon_task`).
    pub async fn update_task_progress(
        &self,
        task_id: &str,
        progress: u8,
        status: Option<TaskStatus>,
    ) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(task_id)
            .ok_or_else(|| PlanError::TaskNotFound(task_id.to_string()))?;

        if task.status.is_terminal() {
            return Err(PlanError::Validation(format!(
                "task {task_id} is in a terminal state"
            )));
        }

        // InProgress is only reachable through assign_task and Pending only
        // through abandon_task; both keep the assignment bookkeeping intact.
        if matches!(status, Some(TaskStatus::InProgress | TaskStatus::Pending)) {
            return Err(PlanError::Validation(format!(
                "task {task_id} cannot be moved to that state via a progress update"
            )));
        }

        task.progress = progress.min(100);
        if let Some(status) = status {
            task.status = status;
            if status == TaskStatus::Completed {
                task.progress = 100;
                if task.completed_at.is_none() {
                    let now = Utc::now();
                    task.completed_at = Some(now);
                    if let Some(started) = task.started_at {
                        let minutes = (now - started).num_minutes().max(0);
                        task.actual_duration_mins = Some(u32::try_from(minutes).unwrap_or(u32::MAX));
                    }
                }
            }
        }

        debug!(task_id = %task_id, progress = task.progress, "task progress updated");
        Ok(())
    }

    /// Returns an in-progress task to the pending pool, clearing its
    /// assignment, start time, and progress.
    ///
    /// # Errors
    /// Returns `TaskNotFound` for an unknown id and `Validation` when the
    /// task is not in progress.
    pub async fn abandon_task(&self, task_id: &str) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(task_id)
            .ok_or_else(|| PlanError::TaskNotFound(task_id.to_string()))?;

        if task.status != TaskStatus::InProgress {
            return Err(PlanError::Validation(format!(
                "task {task_id} is not in progress"
            )));
        }

        task.status = TaskStatus::Pending;
        task.assigned_agent = None;
        task.started_at = None;
        task.progress = 0;
        info!(task_id = %task_id, "task abandoned");
        Ok(())
    }

    /// Sets a mission's status.
    ///
    /// # Errors
    /// Returns `MissionNotFound` for an unknown id.
    pub async fn update_mission_status(
        &self,
        mission_id: &str,
        status: MissionStatus,
    ) -> Result<()> {
        self.set_mission_status(mission_id, status).await
    }

    async fn set_mission_status(&self, mission_id: &str, status: MissionStatus) -> Result<()> {
        let mut missions = self.missions.write().await;
        let mission = missions
            .get_mut(mission_id)
            .ok_or_else(|| PlanError::MissionNotFound(mission_id.to_string()))?;
        mission.status = status;
        mission.updated_at = Utc::now();
        Ok(())
    }

    /// Returns a mission by id.
    pub async fn mission(&self, mission_id: &str) -> Option<MissionDirective> {
        self.missions.read().await.get(mission_id).cloned()
    }

    /// Returns a mission's tasks in topological order.
    ///
    /// # Errors
    /// Returns `MissionNotFound` for an unknown id.
    pub async fn mission_tasks(&self, mission_id: &str) -> Result<Vec<MissionTask>> {
        if self.mission(mission_id).await.is_none() {
            return Err(PlanError::MissionNotFound(mission_id.to_string()));
        }

        let order = self.task_order.read().await;
        let tasks = self.tasks.read().await;
        let ordered = order
            .get(mission_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| tasks.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(ordered)
    }

    /// Returns a task by id.
    pub async fn task(&self, task_id: &str) -> Option<MissionTask> {
        self.tasks.read().await.get(task_id).cloned()
    }

    /// Returns a mission's dependency edges.
    pub async fn dependencies_for(&self, mission_id: &str) -> Vec<TaskDependency> {
        self.dependencies
            .read()
            .await
            .get(mission_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns all missions.
    pub async fn all_missions(&self) -> Vec<MissionDirective> {
        self.missions.read().await.values().cloned().collect()
    }

    /// Returns counters over the current stores.
    pub async fn stats(&self) -> PlannerStats {
        let missions = self.missions.read().await;
        let tasks = self.tasks.read().await;

        PlannerStats {
            total_missions: missions.len(),
            active_missions: missions
                .values()
                .filter(|m| m.status == MissionStatus::Active)
                .count(),
            completed_missions: missions
                .values()
                .filter(|m| m.status == MissionStatus::Completed)
                .count(),
            total_tasks: tasks.len(),
            pending_tasks: tasks
                .values()
                .filter(|t| t.status == TaskStatus::Pending)
                .count(),
            in_progress_tasks: tasks
                .values()
                .filter(|t| t.status == TaskStatus::InProgress)
                .count(),
            completed_tasks: tasks
                .values()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            failed_tasks: tasks
                .values()
                .filter(|t| t.status == TaskStatus::Failed)
                .count(),
        }
    }

    /// Builds a phased execution plan for a mission.
    ///
    /// # Errors
    /// Returns `MissionNotFound` for an unknown id.
    pub async fn build_execution_plan(&self, mission_id: &str) -> Result<ExecutionPlan> {
        let tasks = self.mission_tasks(mission_id).await?;
        Ok(plan::build_execution_plan(mission_id, &tasks))
    }
}

impl Default for MissionPlanner {
    fn default() -> Self {
        Self::new()
    }
}
