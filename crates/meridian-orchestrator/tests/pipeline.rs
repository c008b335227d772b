//! Full pipeline: plan a mission, execute every task, aggregate the result.

use meridian_core::{aggregate_results, MissionPlanner};
use meridian_models::{
    MissionCategory, MissionOutcome, NewMissionDirective, Priority, TaskStatus,
};
use meridian_orchestrator::{builtin_registry, ExecutionContext, ExecutorAgent};

fn directive(category: MissionCategory) -> NewMissionDirective {
    NewMissionDirective {
        title: "End-to-end mission".to_string(),
        description: "Implement the feature and validate it".to_string(),
        priority: Priority::High,
        category,
        constraints: vec![],
        success_criteria: vec![],
        estimated_effort_hours: 6.0,
        deadline: None,
        dependencies: vec![],
        tags: vec![],
    }
}

#[tokio::test]
async fn development_mission_runs_to_completion() {
    let planner = MissionPlanner::new();
    let mission_id = planner
        .create_mission(directive(MissionCategory::Development))
        .await
        .unwrap();

    let executor = ExecutorAgent::new(ExecutionContext::new(), builtin_registry());
    let agent_id = executor.agent_id().to_string();

    let mut results = Vec::new();
    while let Some(task) = planner.get_next_task(&agent_id).await {
        assert!(planner.assign_task(&task.id, &agent_id).await.unwrap());

        let result = executor.execute_task(&task).await;
        planner
            .update_task_progress(&task.id, 100, Some(TaskStatus::Completed))
            .await
            .unwrap();
        results.push(result);
    }

    // templates (code + test) plus the extracted implement/validate tasks
    assert_eq!(results.len(), 4);

    let mission = aggregate_results(&mission_id, &results);
    assert_eq!(mission.status, MissionOutcome::Completed);
    assert_eq!(mission.completed_tasks, 4);
    assert_eq!(mission.failed_tasks, 0);
    assert!((mission.metrics.overall_success - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn failed_execution_surfaces_in_the_mission_result() {
    let planner = MissionPlanner::new();
    let mission_id = planner
        .create_mission(directive(MissionCategory::Research))
        .await
        .unwrap();

    // an empty registry fails readiness for every task
    let executor = ExecutorAgent::new(
        ExecutionContext::new(),
        meridian_orchestrator::ToolRegistry::new(),
    );
    let agent_id = executor.agent_id().to_string();

    let mut results = Vec::new();
    while let Some(task) = planner.get_next_task(&agent_id).await {
        planner.assign_task(&task.id, &agent_id).await.unwrap();
        let result = executor.execute_task(&task).await;
        planner
            .update_task_progress(&task.id, 0, Some(TaskStatus::Failed))
            .await
            .unwrap();
        results.push(result);
    }

    assert!(!results.is_empty());
    let mission = aggregate_results(&mission_id, &results);
    assert_eq!(mission.status, MissionOutcome::Failed);
    assert_eq!(mission.completed_tasks, 0);
    assert!(mission
        .recommendations
        .contains(&"Review failed tasks and implement fixes".to_string()));
}
