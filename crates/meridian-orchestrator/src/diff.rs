//! Change tracking for mutating tasks.
//!
//! Compares the execution context's state snapshot against the changes a
//! task proposes in its output, producing a shallow key-level diff. Diff
//! generation is best effort and never fails a task.

use meridian_models::{ChangeKind, DiffChange, DiffResult, TaskOutput};
use serde_json::{Map, Value};

use crate::error::{ExecutionError, Result};

/// Pulls the proposed changes out of a task output.
///
/// Looks at `result["changes"]` first, then `metadata["changes"]`. Returns
/// `None` when the task proposed nothing.
#[must_use]
pub fn proposed_changes(output: &TaskOutput) -> Option<&Value> {
    output
        .result
        .get("changes")
        .or_else(|| output.metadata.get("changes"))
}

/// Computes a shallow key diff between a state snapshot and proposed
/// changes.
///
/// A `null` proposed value removes the key; a new key is an addition; a
/// differing value is a modification. Returns `None` when the output
/// proposes no changes.
///
/// # Errors
/// Returns `ExecutionError::Diff` when the snapshot or the proposed changes
/// are not JSON objects.
pub fn track_changes(current_state: &Value, output: &TaskOutput) -> Result<Option<DiffResult>> {
    let Some(proposed) = proposed_changes(output) else {
        return Ok(None);
    };

    let before = current_state
        .as_object()
        .ok_or_else(|| ExecutionError::Diff("state snapshot is not an object".to_string()))?;
    let proposed = proposed
        .as_object()
        .ok_or_else(|| ExecutionError::Diff("proposed changes are not an object".to_string()))?;

    let mut after: Map<String, Value> = before.clone();
    let mut changes = Vec::new();

    for (key, new_value) in proposed {
        match (before.get(key), new_value) {
            (Some(old), Value::Null) => {
                changes.push(DiffChange {
                    path: key.clone(),
                    kind: ChangeKind::Removed,
                    old_value: Some(old.clone()),
                    new_value: None,
                });
                after.remove(key);
            }
            (None, Value::Null) => {}
            (Some(old), new) if old != new => {
                changes.push(DiffChange {
                    path: key.clone(),
                    kind: ChangeKind::Modified,
                    old_value: Some(old.clone()),
                    new_value: Some(new.clone()),
                });
                after.insert(key.clone(), new.clone());
            }
            (Some(_), _) => {}
            (None, new) => {
                changes.push(DiffChange {
                    path: key.clone(),
                    kind: ChangeKind::Added,
                    old_value: None,
                    new_value: Some(new.clone()),
                });
                after.insert(key.clone(), new.clone());
            }
        }
    }

    let added = changes.iter().filter(|c| c.kind == ChangeKind::Added).count();
    let modified = changes.iter().filter(|c| c.kind == ChangeKind::Modified).count();
    let removed = changes.iter().filter(|c| c.kind == ChangeKind::Removed).count();

    Ok(Some(DiffResult {
        before: current_state.clone(),
        after: Value::Object(after),
        changes,
        summary: format!("{added} added, {modified} modified, {removed} removed"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn output_with_changes(changes: Value) -> TaskOutput {
        TaskOutput {
            result: json!({ "changes": changes }),
            logs: vec![],
            metadata: std::collections::HashMap::new(),
        }
    }

    #[test]
    fn test_shallow_diff_kinds() {
        let state = json!({"a": 1, "b": 2, "c": 3});
        let output = output_with_changes(json!({"a": 10, "c": null, "d": 4}));

        let diff = track_changes(&state, &output).unwrap().unwrap();
        assert_eq!(diff.changes.len(), 3);
        assert_eq!(diff.summary, "1 added, 1 modified, 1 removed");
        assert_eq!(diff.after, json!({"a": 10, "b": 2, "d": 4}));
    }

    #[test]
    fn test_unchanged_keys_are_skipped() {
        let state = json!({"a": 1});
        let output = output_with_changes(json!({"a": 1}));

        let diff = track_changes(&state, &output).unwrap().unwrap();
        assert!(diff.changes.is_empty());
    }

    #[test]
    fn test_metadata_changes_used_as_fallback() {
        let mut output = TaskOutput {
            result: json!({"summary": "done"}),
            logs: vec![],
            metadata: std::collections::HashMap::new(),
        };
        output
            .metadata
            .insert("changes".to_string(), json!({"new_key": true}));

        let diff = track_changes(&json!({}), &output).unwrap().unwrap();
        assert_eq!(diff.changes.len(), 1);
        assert_eq!(diff.changes[0].kind, ChangeKind::Added);
    }

    #[test]
    fn test_no_changes_means_no_diff() {
        let output = TaskOutput::default();
        assert!(track_changes(&json!({}), &output).unwrap().is_none());
    }

    #[test]
    fn test_non_object_changes_rejected() {
        let state = json!({});
        let output = output_with_changes(json!([1, 2, 3]));

        let err = track_changes(&state, &output).unwrap_err();
        assert!(matches!(err, ExecutionError::Diff(_)));
    }
}
