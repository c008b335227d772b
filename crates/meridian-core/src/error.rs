// Error types for mission planning

use thiserror::Error;

/// Result type for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised by the dependency graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Circular dependency detected; names an offending task id.
    #[error("circular dependency detected involving task: {0}")]
    CycleDetected(String),

    /// An edge references a task that does not exist in the mission.
    #[error("dependency task not found: {0}")]
    DependencyNotFound(String),

    /// A task id was not present in the graph's node map.
    #[error("unknown task in graph: {0}")]
    UnknownTask(String),
}

/// Errors raised by the mission planner.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Malformed directive rejected before any task exists.
    #[error("invalid directive: {0}")]
    Validation(String),

    /// Dependency graph construction or ordering failed.
    #[error("dependency graph error: {0}")]
    Graph(#[from] GraphError),

    /// Mission id not found in the planner's store.
    #[error("mission not found: {0}")]
    MissionNotFound(String),

    /// Task id not found in the planner's store.
    #[error("task not found: {0}")]
    TaskNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_converts_to_plan_error() {
        let err: PlanError = GraphError::CycleDetected("task-a".to_string()).into();
        match err {
            PlanError::Graph(GraphError::CycleDetected(id)) => assert_eq!(id, "task-a"),
            _ => panic!("expected Graph(CycleDetected) variant"),
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = PlanError::Validation("title is required".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("invalid directive"));
        assert!(msg.contains("title is required"));
    }
}
