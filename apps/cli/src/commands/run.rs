//! `mrd run`: the full pipeline from directive to aggregated result.

use meridian_core::{aggregate_results, MissionPlanner};
use meridian_models::{ExecutionStatus, TaskStatus};
use meridian_orchestrator::{builtin_registry, ExecutionContext, ExecutorAgent};

use super::load_directive;

pub async fn execute(file: &str) -> anyhow::Result<()> {
    let directive = load_directive(file)?;
    let planner = MissionPlanner::new();
    let mission_id = planner.create_mission(directive).await?;

    let executor = ExecutorAgent::new(ExecutionContext::new(), builtin_registry());
    let agent_id = executor.agent_id().to_string();

    let mut results = Vec::new();
    while let Some(task) = planner.get_next_task(&agent_id).await {
        if !planner.assign_task(&task.id, &agent_id).await? {
            continue;
        }

        println!("Executing: {} [{}]", task.title, task.task_type);
        let result = executor.execute_task(&task).await;

        let (progress, status) = if result.status == ExecutionStatus::Success {
            (100, TaskStatus::Completed)
        } else {
            (0, TaskStatus::Failed)
        };
        planner.update_task_progress(&task.id, progress, Some(status)).await?;
        results.push(result);
    }

    let mission = aggregate_results(&mission_id, &results);
    println!();
    println!("Mission result: {:?}", mission.status);
    println!(
        "Tasks: {} total, {} completed, {} failed",
        mission.total_tasks, mission.completed_tasks, mission.failed_tasks,
    );
    println!("Total duration: {}ms", mission.total_duration_ms);
    println!(
        "Success rate: {:.1}%  Average quality: {:.1}",
        mission.metrics.overall_success, mission.metrics.average_quality,
    );
    if !mission.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for recommendation in &mission.recommendations {
            println!("  - {recommendation}");
        }
    }
    Ok(())
}
