//! Documentation generation tool.

use async_trait::async_trait;
use serde_json::json;

use crate::error::Result;
use crate::tool::{Tool, ToolOutput, ToolRequest};

/// Produces documentation artifacts for documentation tasks.
#[derive(Debug, Clone, Copy)]
pub struct DocsGeneratorTool;

#[async_trait]
impl Tool for DocsGeneratorTool {
    fn name(&self) -> &str {
        "docs-generator"
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput> {
        let mut output = ToolOutput::from_result(json!({
            "documents": ["README.md", "docs/overview.md"],
            "format": "markdown",
        }));
        output
            .logs
            .push(format!("docs-generator: generated docs for {}", request.task_id));
        output.metadata.insert("tool".to_string(), json!("docs-generator"));
        Ok(output)
    }
}
