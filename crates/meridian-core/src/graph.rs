//! Dependency graph construction and validation for mission tasks.
//!
//! Builds a directed graph from task dependency records and provides cycle
//! detection and topological sorting. Derives the standard dependency edges
//! for a freshly planned task set.

use crate::error::GraphError;
use meridian_models::{DependencyKind, MissionTask, TaskDependency, TaskType};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

type Result<T> = std::result::Result<T, GraphError>;

/// Derives dependency edges for a planned task set.
///
/// Code tasks form a chain where each blocks the next. Test and review tasks
/// require the final code task, and deploy tasks require the final test task.
#[must_use]
pub fn build_dependency_edges(tasks: &[MissionTask]) -> Vec<TaskDependency> {
    let mut edges = Vec::new();

    let code_tasks: Vec<&MissionTask> =
        tasks.iter().filter(|t| t.task_type == TaskType::Code).collect();
    let test_tasks: Vec<&MissionTask> =
        tasks.iter().filter(|t| t.task_type == TaskType::Test).collect();

    for pair in code_tasks.windows(2) {
        edges.push(TaskDependency {
            task_id: pair[1].id.clone(),
            depends_on: pair[0].id.clone(),
            kind: DependencyKind::Blocks,
            description: "Sequential code development".to_string(),
        });
    }

    if let Some(last_code) = code_tasks.last() {
        for task in tasks
            .iter()
            .filter(|t| matches!(t.task_type, TaskType::Test | TaskType::Review))
        {
            edges.push(TaskDependency {
                task_id: task.id.clone(),
                depends_on: last_code.id.clone(),
                kind: DependencyKind::Requires,
                description: "Requires code completion".to_string(),
            });
        }
    }

    if let Some(last_test) = test_tasks.last() {
        for task in tasks.iter().filter(|t| t.task_type == TaskType::Deploy) {
            edges.push(TaskDependency {
                task_id: task.id.clone(),
                depends_on: last_test.id.clone(),
                kind: DependencyKind::Requires,
                description: "Requires testing completion".to_string(),
            });
        }
    }

    edges
}

/// Dependency graph over a mission's tasks.
///
/// Edges point from a prerequisite to its dependent, so a topological sort
/// yields a valid execution order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    task_map: HashMap<NodeIndex, String>,
}

impl DependencyGraph {
    /// Builds a graph from tasks and their dependency records.
    ///
    /// # Errors
    /// Returns an error if a dependency references an unknown task or if the
    /// graph contains a cycle.
    pub fn from_tasks(tasks: &[MissionTask], dependencies: &[TaskDependency]) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();
        let mut task_map = HashMap::new();

        for task in tasks {
            let node = graph.add_node(task.id.clone());
            node_map.insert(task.id.clone(), node);
            task_map.insert(node, task.id.clone());
        }

        for dep in dependencies {
            let to_node = *node_map
                .get(&dep.task_id)
                .ok_or_else(|| GraphError::UnknownTask(dep.task_id.clone()))?;
            let from_node = *node_map
                .get(&dep.depends_on)
                .ok_or_else(|| GraphError::DependencyNotFound(dep.depends_on.clone()))?;

            // Prerequisite first, dependent second.
            graph.add_edge(from_node, to_node, ());
        }

        let built = Self { graph, node_map, task_map };
        built.topological_sort()?;
        Ok(built)
    }

    /// Returns task IDs in an order where every prerequisite precedes its
    /// dependents.
    ///
    /// # Errors
    /// Returns [`GraphError::CycleDetected`] naming a task on the cycle.
    pub fn topological_sort(&self) -> Result<Vec<String>> {
        match toposort(&self.graph, None) {
            Ok(sorted) => Ok(sorted
                .iter()
                .filter_map(|idx| self.task_map.get(idx).cloned())
                .collect()),
            Err(cycle) => {
                let task_id = self
                    .task_map
                    .get(&cycle.node_id())
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                Err(GraphError::CycleDetected(task_id))
            }
        }
    }

    /// Task ids whose prerequisites are all in `completed`.
    #[must_use]
    pub fn ready_tasks(&self, completed: &HashSet<String>) -> Vec<String> {
        self.graph
            .node_indices()
            .filter(|&node| {
                self.graph
                    .neighbors_directed(node, Direction::Incoming)
                    .all(|dep| {
                        self.task_map
                            .get(&dep)
                            .is_some_and(|id| completed.contains(id))
                    })
            })
            .filter_map(|node| self.task_map.get(&node))
            .filter(|id| !completed.contains(*id))
            .cloned()
            .collect()
    }

    /// Number of tasks in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of dependency edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the given task is present in the graph.
    #[must_use]
    pub fn contains(&self, task_id: &str) -> bool {
        self.node_map.contains_key(task_id)
    }
}
