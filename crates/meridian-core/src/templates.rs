//! Static task templates, selected by mission category.
//!
//! Each category maps to a fixed set of blueprint tasks with default type,
//! duration, resource needs, and acceptance criteria. Templates are a closed
//! match over `MissionCategory`; there is no dynamic registration.

use meridian_models::{MissionCategory, Priority, TaskResources, TaskType};

/// A blueprint for one decomposed task.
#[derive(Debug, Clone)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub task_type: TaskType,
    pub priority: Priority,
    /// Default estimate in minutes.
    pub estimated_duration_mins: u32,
    pub tools: &'static [&'static str],
    pub files: &'static [&'static str],
    pub apis: &'static [&'static str],
    pub permissions: &'static [&'static str],
    pub acceptance_criteria: &'static [&'static str],
}

impl TaskTemplate {
    /// Materializes the template's resource record.
    #[must_use]
    pub fn resources(&self) -> TaskResources {
        TaskResources {
            tools: self.tools.iter().map(|s| (*s).to_string()).collect(),
            files: self.files.iter().map(|s| (*s).to_string()).collect(),
            apis: self.apis.iter().map(|s| (*s).to_string()).collect(),
            permissions: self.permissions.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Materializes the acceptance criteria.
    #[must_use]
    pub fn criteria(&self) -> Vec<String> {
        self.acceptance_criteria.iter().map(|s| (*s).to_string()).collect()
    }
}

const DEVELOPMENT: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Code Implementation",
        description: "Implement the core functionality",
        task_type: TaskType::Code,
        priority: Priority::High,
        estimated_duration_mins: 120,
        tools: &["github", "code-analysis"],
        files: &["src/**/*"],
        apis: &[],
        permissions: &["read", "write"],
        acceptance_criteria: &[
            "Code compiles without errors",
            "All tests pass",
            "Code review completed",
        ],
    },
    TaskTemplate {
        title: "Unit Testing",
        description: "Write comprehensive unit tests",
        task_type: TaskType::Test,
        priority: Priority::High,
        estimated_duration_mins: 60,
        tools: &["test-runner"],
        files: &["test/**/*"],
        apis: &[],
        permissions: &["read", "write"],
        acceptance_criteria: &["Test coverage > 90%", "All tests pass", "Edge cases covered"],
    },
];

const TESTING: &[TaskTemplate] = &[TaskTemplate {
    title: "Test Execution",
    description: "Execute comprehensive testing",
    task_type: TaskType::Test,
    priority: Priority::High,
    estimated_duration_mins: 120,
    tools: &["test-runner", "code-analysis"],
    files: &["test/**/*", "src/**/*"],
    apis: &[],
    permissions: &["read", "execute"],
    acceptance_criteria: &[
        "All tests pass",
        "Coverage requirements met",
        "Performance benchmarks achieved",
    ],
}];

const DEPLOYMENT: &[TaskTemplate] = &[TaskTemplate {
    title: "Environment Setup",
    description: "Prepare deployment environment",
    task_type: TaskType::Deploy,
    priority: Priority::Critical,
    estimated_duration_mins: 90,
    tools: &["github"],
    files: &["deploy/**/*"],
    apis: &["deployment-api"],
    permissions: &["deploy"],
    acceptance_criteria: &[
        "Environment is ready",
        "Dependencies installed",
        "Configuration validated",
    ],
}];

const RESEARCH: &[TaskTemplate] = &[TaskTemplate {
    title: "Research Analysis",
    description: "Conduct research and analysis",
    task_type: TaskType::Research,
    priority: Priority::Medium,
    estimated_duration_mins: 180,
    tools: &["research"],
    files: &["research/**/*", "data/**/*"],
    apis: &["research-api"],
    permissions: &["read", "analyze"],
    acceptance_criteria: &[
        "Research completed",
        "Analysis documented",
        "Recommendations provided",
    ],
}];

// Maintenance has no dedicated blueprint in the upstream template table;
// it decomposes into documentation plus review work.
const MAINTENANCE: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Documentation Update",
        description: "Create or update project documentation",
        task_type: TaskType::Documentation,
        priority: Priority::Medium,
        estimated_duration_mins: 90,
        tools: &["docs-generator"],
        files: &["docs/**/*", "README.md"],
        apis: &[],
        permissions: &["read", "write"],
        acceptance_criteria: &[
            "Documentation updated",
            "Examples provided",
            "Formatting consistent",
        ],
    },
    TaskTemplate {
        title: "Code Review",
        description: "Review code for quality and standards",
        task_type: TaskType::Review,
        priority: Priority::High,
        estimated_duration_mins: 60,
        tools: &["github", "code-analysis"],
        files: &["src/**/*", "test/**/*"],
        apis: &[],
        permissions: &["read", "review"],
        acceptance_criteria: &[
            "Code reviewed thoroughly",
            "Feedback provided",
            "Standards compliance checked",
        ],
    },
];

/// Returns the blueprint tasks for a mission category.
#[must_use]
pub fn templates_for_category(category: MissionCategory) -> &'static [TaskTemplate] {
    match category {
        MissionCategory::Development => DEVELOPMENT,
        MissionCategory::Testing => TESTING,
        MissionCategory::Deployment => DEPLOYMENT,
        MissionCategory::Research => RESEARCH,
        MissionCategory::Maintenance => MAINTENANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_templates_cover_code_and_test() {
        let templates = templates_for_category(MissionCategory::Development);
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].task_type, TaskType::Code);
        assert_eq!(templates[1].task_type, TaskType::Test);
    }

    #[test]
    fn test_deployment_template_is_critical() {
        let templates = templates_for_category(MissionCategory::Deployment);
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].priority, Priority::Critical);
        assert_eq!(templates[0].task_type, TaskType::Deploy);
    }

    #[test]
    fn test_every_category_has_templates() {
        for category in [
            MissionCategory::Development,
            MissionCategory::Testing,
            MissionCategory::Deployment,
            MissionCategory::Maintenance,
            MissionCategory::Research,
        ] {
            assert!(!templates_for_category(category).is_empty());
        }
    }

    #[test]
    fn test_template_resources_materialize() {
        let template = &templates_for_category(MissionCategory::Development)[0];
        let resources = template.resources();
        assert!(resources.tools.contains(&"github".to_string()));
        assert!(resources.permissions.contains(&"write".to_string()));
    }
}
