//! Heuristic requirement extraction from directive descriptions.
//!
//! Scans a directive's free text for requirement keywords and yields extra
//! task blueprints beyond the category template set. The scan is keyword
//! based by design: extracted tasks supplement the templates, they do not
//! replace them.

use meridian_models::{Priority, TaskResources, TaskType};

/// Requirement complexity, used to pick a duration estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Duration estimate in minutes for a requirement of this complexity.
    #[must_use]
    pub fn duration_mins(self) -> u32 {
        match self {
            Self::Low => 30,
            Self::Medium => 60,
            Self::High => 120,
        }
    }
}

/// A requirement lifted out of a directive description.
#[derive(Debug, Clone)]
pub struct ExtractedRequirement {
    pub title: &'static str,
    pub description: &'static str,
    pub task_type: TaskType,
    pub complexity: Complexity,
    pub resources: TaskResources,
    pub criteria: Vec<String>,
}

impl ExtractedRequirement {
    /// Extracted tasks inherit the mission's priority.
    #[must_use]
    pub fn priority(&self, mission_priority: Priority) -> Priority {
        mission_priority
    }
}

fn resources(tools: &[&str], files: &[&str], permissions: &[&str]) -> TaskResources {
    TaskResources {
        tools: tools.iter().map(|s| (*s).to_string()).collect(),
        files: files.iter().map(|s| (*s).to_string()).collect(),
        apis: Vec::new(),
        permissions: permissions.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn criteria(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Scans a description and returns the requirements it implies.
///
/// Recognized keywords: analyze/analysis, plan/planning,
/// implement/implementation, validate/validation. Matching is
/// case-insensitive and purely lexical.
#[must_use]
pub fn extract_requirements(description: &str) -> Vec<ExtractedRequirement> {
    let text = description.to_lowercase();
    let mut requirements = Vec::new();

    if text.contains("analyze") || text.contains("analysis") {
        requirements.push(ExtractedRequirement {
            title: "Analysis Requirements",
            description: "Analyze requirements and constraints",
            task_type: TaskType::Research,
            complexity: Complexity::Medium,
            resources: resources(&["research"], &["requirements/**/*", "specs/**/*"], &["read", "analyze"]),
            criteria: criteria(&[
                "Analysis completed",
                "Requirements documented",
                "Constraints identified",
            ]),
        });
    }

    if text.contains("plan") || text.contains("planning") {
        requirements.push(ExtractedRequirement {
            title: "Planning Requirements",
            description: "Create detailed execution plan",
            task_type: TaskType::Research,
            complexity: Complexity::Medium,
            resources: resources(&["research"], &["plans/**/*", "roadmap/**/*"], &["read", "write"]),
            criteria: criteria(&["Plan created", "Timeline established", "Resources allocated"]),
        });
    }

    if text.contains("implement") || text.contains("implementation") {
        requirements.push(ExtractedRequirement {
            title: "Implementation Requirements",
            description: "Implement core functionality",
            task_type: TaskType::Code,
            complexity: Complexity::High,
            resources: resources(&["github", "code-analysis"], &["src/**/*"], &["read", "write"]),
            criteria: criteria(&["Code implemented", "Tests passing", "Documentation updated"]),
        });
    }

    if text.contains("validate") || text.contains("validation") {
        requirements.push(ExtractedRequirement {
            title: "Validation Requirements",
            description: "Validate implementation and quality",
            task_type: TaskType::Test,
            complexity: Complexity::Medium,
            resources: resources(&["test-runner"], &["src/**/*", "test/**/*"], &["read", "execute"]),
            criteria: criteria(&[
                "Validation passed",
                "Quality gates met",
                "Standards compliance verified",
            ]),
        });
    }

    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_research_from_analyze() {
        let reqs = extract_requirements("Analyze the current architecture");
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].task_type, TaskType::Research);
        assert_eq!(reqs[0].complexity, Complexity::Medium);
    }

    #[test]
    fn test_extracts_code_from_implement() {
        let reqs = extract_requirements("Implement the billing service");
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].task_type, TaskType::Code);
        assert_eq!(reqs[0].complexity, Complexity::High);
        assert_eq!(reqs[0].complexity.duration_mins(), 120);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let reqs = extract_requirements("VALIDATE the output format");
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].task_type, TaskType::Test);
    }

    #[test]
    fn test_multiple_keywords_yield_multiple_requirements() {
        let reqs =
            extract_requirements("Analyze the system, plan the rollout, and implement the fix");
        assert_eq!(reqs.len(), 3);
    }

    #[test]
    fn test_no_keywords_yields_nothing() {
        let reqs = extract_requirements("Rename the repository");
        assert!(reqs.is_empty());
    }

    #[test]
    fn test_extracted_tasks_inherit_mission_priority() {
        let reqs = extract_requirements("implement it");
        assert_eq!(reqs[0].priority(Priority::Critical), Priority::Critical);
    }
}
