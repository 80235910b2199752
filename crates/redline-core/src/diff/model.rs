//! Data structures for document comparison results

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification of a single detected change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present in the new document but not the old
    Added,
    /// Present in the old document but not the new
    Removed,
    /// Present in both documents with differing values
    Modified,
}

/// A single detected difference between two documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Change {
    /// Dot-separated path to the changed field, with a trailing `[]`
    /// for array content changes (e.g. `mvp.features[]`)
    pub field: String,
    /// Value on the old side, absent for additions
    pub old: Option<Value>,
    /// Value on the new side, absent for removals
    pub new: Option<Value>,
    /// Whether the field was added, removed, or modified
    #[serde(rename = "type")]
    pub kind: ChangeKind,
}

impl Change {
    /// Construct an addition record
    pub fn added(field: impl Into<String>, new: Value) -> Self {
        Self {
            field: field.into(),
            old: None,
            new: Some(new),
            kind: ChangeKind::Added,
        }
    }

    /// Construct a removal record
    pub fn removed(field: impl Into<String>, old: Value) -> Self {
        Self {
            field: field.into(),
            old: Some(old),
            new: None,
            kind: ChangeKind::Removed,
        }
    }

    /// Construct a modification record
    pub fn modified(field: impl Into<String>, old: Value, new: Value) -> Self {
        Self {
            field: field.into(),
            old: Some(old),
            new: Some(new),
            kind: ChangeKind::Modified,
        }
    }
}
