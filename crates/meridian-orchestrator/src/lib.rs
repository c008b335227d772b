//! Task execution for Meridian.
//!
//! Hosts the executor agent that runs planned tasks against a registry of
//! pluggable tools, gated by policy checks and readiness validation, with
//! audit logging, change tracking, and output sanitization on the way out.

pub mod audit;
pub mod diff;
pub mod error;
pub mod executor;
pub mod policy;
pub mod readiness;
pub mod sanitize;
pub mod tool;
pub mod tools;

pub use audit::{AuditEvent, AuditSink, MemoryAuditSink, TracingAuditSink};
pub use diff::track_changes;
pub use error::{ExecutionError, Result};
pub use executor::{ExecutionContext, ExecutorAgent};
pub use policy::{AllowAllPolicy, PolicyDecision, PolicyEvaluator};
pub use readiness::check_readiness;
pub use sanitize::sanitize_output;
pub use tool::{Tool, ToolOutput, ToolRegistry, ToolRequest};
pub use tools::builtin_registry;
