//! Built-in tool implementations.

mod code_analysis;
mod docs_generator;
mod github;
mod research;
mod test_runner;

pub use code_analysis::CodeAnalysisTool;
pub use docs_generator::DocsGeneratorTool;
pub use github::GithubTool;
pub use research::ResearchTool;
pub use test_runner::TestRunnerTool;

use crate::tool::ToolRegistry;
use std::sync::Arc;

/// Builds a registry with every built-in tool registered.
#[must_use]
pub fn builtin_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GithubTool::default()));
    registry.register(Arc::new(TestRunnerTool));
    registry.register(Arc::new(CodeAnalysisTool));
    registry.register(Arc::new(DocsGeneratorTool));
    registry.register(Arc::new(ResearchTool));
    registry
}
