//! `mrd mission` subcommands: create and plan directives from TOML files.

use clap::Subcommand;
use meridian_core::MissionPlanner;

use super::load_directive;

#[derive(Subcommand, Debug)]
pub enum MissionCommand {
    /// Create a mission from a directive file and print its tasks
    Create {
        /// Path to a TOML directive file
        #[arg(long)]
        file: String,
    },

    /// Create a mission and print its phased execution plan
    Plan {
        /// Path to a TOML directive file
        #[arg(long)]
        file: String,
    },
}

pub async fn execute(command: MissionCommand) -> anyhow::Result<()> {
    match command {
        MissionCommand::Create { file } => create(&file).await,
        MissionCommand::Plan { file } => plan(&file).await,
    }
}

async fn create(file: &str) -> anyhow::Result<()> {
    let directive = load_directive(file)?;
    let planner = MissionPlanner::new();
    let mission_id = planner.create_mission(directive).await?;

    let mission = planner
        .mission(&mission_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("mission disappeared after planning"))?;
    let tasks = planner.mission_tasks(&mission_id).await?;

    println!("Mission: {} [{}]", mission.title, mission_id);
    println!("Category: {}  Priority: {}", mission.category, mission.priority);
    println!();
    println!("Tasks ({}):", tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        println!(
            "  {}. {} [{}] priority={} estimate={}m deps={}",
            i + 1,
            task.title,
            task.task_type,
            task.priority,
            task.estimated_duration_mins,
            task.dependencies.len(),
        );
    }
    Ok(())
}

async fn plan(file: &str) -> anyhow::Result<()> {
    let directive = load_directive(file)?;
    let planner = MissionPlanner::new();
    let mission_id = planner.create_mission(directive).await?;
    let plan = planner.build_execution_plan(&mission_id).await?;

    println!("Execution plan for {mission_id}");
    println!("Estimated duration: {}", plan.estimated_duration);
    println!();
    for phase in &plan.phases {
        let marker = if phase.critical_path { " (critical)" } else { "" };
        println!(
            "{}: {} task(s), {}{}",
            phase.name,
            phase.task_ids.len(),
            phase.estimated_duration,
            marker,
        );
    }
    println!();
    println!("Critical path tasks: {}", plan.critical_path.len());
    println!("Checkpoints: {}", plan.checkpoints.len());
    Ok(())
}
