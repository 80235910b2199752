//! Structural diff computation engine.
//!
//! The core entry point is [`compare`], which accepts two JSON documents and
//! produces an ordered list of [`Change`] records.

use crate::diff::model::Change;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Compute a structured, deterministic diff between two documents.
///
/// Walks both documents recursively and records every added, removed, and
/// modified field. A non-object root (including `null`) contributes no keys,
/// so comparing two scalars at the top level yields an empty list.
///
/// Change ordering follows the documents themselves: all keys of `old_doc`
/// in their original order, then keys present only in `new_doc` in their
/// original order, applied recursively.
pub fn compare(old_doc: &Value, new_doc: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    compare_fields(old_doc, new_doc, "", &mut changes);
    changes
}

/// Walk the keys of two documents at one nesting level.
fn compare_fields(old_doc: &Value, new_doc: &Value, prefix: &str, changes: &mut Vec<Change>) {
    let empty = Map::new();
    let old_map = old_doc.as_object().unwrap_or(&empty);
    let new_map = new_doc.as_object().unwrap_or(&empty);

    // 1. Keys of the old document, in original order
    for (key, old_value) in old_map {
        let path = join_path(prefix, key);
        match new_map.get(key) {
            None => changes.push(Change::removed(path, old_value.clone())),
            Some(new_value) => compare_value(old_value, new_value, path, changes),
        }
    }

    // 2. Keys only the new document has, in original order
    for (key, new_value) in new_map {
        if !old_map.contains_key(key) {
            changes.push(Change::added(join_path(prefix, key), new_value.clone()));
        }
    }
}

/// Compare two values present under the same key.
fn compare_value(old_value: &Value, new_value: &Value, path: String, changes: &mut Vec<Change>) {
    match (old_value, new_value) {
        (Value::Array(old_items), Value::Array(new_items)) => {
            compare_arrays(old_items, new_items, &path, changes);
        }
        (Value::Object(_), Value::Object(_)) => {
            compare_fields(old_value, new_value, &path, changes);
        }
        _ => {
            // Strict same-type equality: `"1"` and `1` are different values
            if old_value != new_value {
                changes.push(Change::modified(path, old_value.clone(), new_value.clone()));
            }
        }
    }
}

/// Compare two arrays by element membership.
///
/// Elements are matched via their canonical serialized form, so ordering is
/// ignored and duplicate elements collapse to one membership entry. Additions
/// are reported before removals, and every emitted record shares the same
/// `path[]` field marker.
fn compare_arrays(
    old_items: &[Value],
    new_items: &[Value],
    field_path: &str,
    changes: &mut Vec<Change>,
) {
    let old_set: BTreeSet<String> = old_items.iter().map(canonical_form).collect();
    let new_set: BTreeSet<String> = new_items.iter().map(canonical_form).collect();
    let field = format!("{}[]", field_path);

    for item in new_items {
        if !old_set.contains(&canonical_form(item)) {
            changes.push(Change::added(field.clone(), item.clone()));
        }
    }
    for item in old_items {
        if !new_set.contains(&canonical_form(item)) {
            changes.push(Change::removed(field.clone(), item.clone()));
        }
    }
}

/// Serialize a value to its canonical comparison key.
///
/// Object keys keep their author order, so two objects count as the same
/// element only when their keys appear in the same order.
fn canonical_form(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Join a path prefix and key with a dot, omitting the dot at the root.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
