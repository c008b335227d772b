//! Repository operations behind the opaque `github` tool contract.

use async_trait::async_trait;
use serde_json::json;

use crate::error::Result;
use crate::tool::{Tool, ToolOutput, ToolRequest};

/// Performs repository work for code, deploy, and review tasks.
///
/// The output contract names the repository and branch that were operated
/// on; downstream validation rejects anything less.
#[derive(Debug, Clone)]
pub struct GithubTool {
    default_repository: String,
    default_branch: String,
}

impl Default for GithubTool {
    fn default() -> Self {
        Self {
            default_repository: "workspace".to_string(),
            default_branch: "main".to_string(),
        }
    }
}

impl GithubTool {
    /// Creates a tool with explicit repository defaults.
    #[must_use]
    pub fn new(repository: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            default_repository: repository.into(),
            default_branch: branch.into(),
        }
    }
}

#[async_trait]
impl Tool for GithubTool {
    fn name(&self) -> &str {
        "github"
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput> {
        let repository = request
            .repository
            .clone()
            .unwrap_or_else(|| self.default_repository.clone());
        let branch = request
            .branch
            .clone()
            .unwrap_or_else(|| self.default_branch.clone());

        let mut output = ToolOutput::from_result(json!({
            "repository": repository,
            "branch": branch,
            "operation": request.task_type.to_string(),
        }));
        output
            .logs
            .push(format!("github: operating on {repository}@{branch}"));
        output
            .metadata
            .insert("tool".to_string(), json!("github"));
        Ok(output)
    }
}
