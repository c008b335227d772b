//! Before/after state deltas recorded for mutating tasks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of change a diff entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One key-level change between a before and an after snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffChange {
    /// Key path within the snapshot.
    pub path: String,
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

/// A computed delta between two state snapshots. Best-effort provenance,
/// never correctness-critical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResult {
    pub before: Value,
    pub after: Value,
    pub changes: Vec<DiffChange>,
    pub summary: String,
}
