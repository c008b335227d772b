//! Research and analysis tool.

use async_trait::async_trait;
use serde_json::json;

use crate::error::Result;
use crate::tool::{Tool, ToolOutput, ToolRequest};

/// Gathers findings for research tasks.
#[derive(Debug, Clone, Copy)]
pub struct ResearchTool;

#[async_trait]
impl Tool for ResearchTool {
    fn name(&self) -> &str {
        "research"
    }

    async fn invoke(&self, request: &ToolRequest) -> Result<ToolOutput> {
        let mut output = ToolOutput::from_result(json!({
            "findings": [
                "Constraints identified",
                "Prior art documented",
            ],
            "summary": format!("Research completed for: {}", request.description),
        }));
        output
            .logs
            .push(format!("research: completed for {}", request.task_id));
        output.metadata.insert("tool".to_string(), json!("research"));
        Ok(output)
    }
}
