//! Audit logging for executor activity.
//!
//! Every significant executor step emits an audit event through an
//! `AuditSink`. Sinks are fire-and-forget: they never fail the operation
//! being audited.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Mutex;
use tracing::{info, warn};

/// A recorded audit event.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub action: String,
    pub resource: String,
    pub success: bool,
    /// Error message for failure events.
    pub error: Option<String>,
    pub details: Value,
    pub agent_id: String,
    pub task_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Receives audit events from the executor.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Records a successful action.
    async fn log_success(
        &self,
        action: &str,
        resource: &str,
        details: Value,
        agent_id: &str,
        task_id: &str,
    );

    /// Records a failed action.
    async fn log_failure(
        &self,
        action: &str,
        resource: &str,
        error: &str,
        details: Value,
        agent_id: &str,
        task_id: &str,
    );
}

/// Emits audit events as structured tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn log_success(
        &self,
        action: &str,
        resource: &str,
        details: Value,
        agent_id: &str,
        task_id: &str,
    ) {
        info!(
            action = %action,
            resource = %resource,
            agent_id = %agent_id,
            task_id = %task_id,
            details = %details,
            "audit"
        );
    }

    async fn log_failure(
        &self,
        action: &str,
        resource: &str,
        error: &str,
        details: Value,
        agent_id: &str,
        task_id: &str,
    ) {
        warn!(
            action = %action,
            resource = %resource,
            agent_id = %agent_id,
            task_id = %task_id,
            error = %error,
            details = %details,
            "audit"
        );
    }
}

/// Collects audit events in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events.
    ///
    /// # Panics
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit lock poisoned").clone()
    }

    fn record(&self, event: AuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn log_success(
        &self,
        action: &str,
        resource: &str,
        details: Value,
        agent_id: &str,
        task_id: &str,
    ) {
        self.record(AuditEvent {
            action: action.to_string(),
            resource: resource.to_string(),
            success: true,
            error: None,
            details,
            agent_id: agent_id.to_string(),
            task_id: task_id.to_string(),
            timestamp: Utc::now(),
        });
    }

    async fn log_failure(
        &self,
        action: &str,
        resource: &str,
        error: &str,
        details: Value,
        agent_id: &str,
        task_id: &str,
    ) {
        self.record(AuditEvent {
            action: action.to_string(),
            resource: resource.to_string(),
            success: false,
            error: Some(error.to_string()),
            details,
            agent_id: agent_id.to_string(),
            task_id: task_id.to_string(),
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_sink_records_in_order() {
        let sink = MemoryAuditSink::new();
        sink.log_success("task_execution_started", "task", json!({}), "agent-1", "task-1")
            .await;
        sink.log_failure(
            "tool_call_failed",
            "tool:github",
            "timed out",
            json!({"duration_ms": 30_000}),
            "agent-1",
            "task-1",
        )
        .await;

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(events[0].success);
        assert_eq!(events[0].action, "task_execution_started");
        assert!(!events[1].success);
        assert_eq!(events[1].error.as_deref(), Some("timed out"));
    }
}
