//! Pure diff engine tests — 26 scenarios.
//!
//! All tests operate on in-memory JSON documents (no I/O, no store).

use redline_core::diff::{compare, Change, ChangeKind};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A realistic normalized PRD document.
fn prd_v1() -> Value {
    json!({
        "background": "Legacy portal replacement",
        "goals": ["Reduce onboarding time"],
        "features": ["Client dashboard", "PRD upload"],
        "constraints": ["Must run on-prem"]
    })
}

/// A revised PRD: background reworded, one feature swapped, constraint
/// dropped, timeline added.
fn prd_v2() -> Value {
    json!({
        "background": "Legacy portal replacement for external clients",
        "goals": ["Reduce onboarding time"],
        "features": ["Client dashboard", "Build preview"],
        "constraints": [],
        "timeline": "6 weeks"
    })
}

/// Field paths of a change list, in emission order.
fn fields(changes: &[Change]) -> Vec<&str> {
    changes.iter().map(|c| c.field.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// S1: Comparing a document against itself yields no changes
#[test]
fn test_identity_yields_no_changes() {
    let doc = prd_v1();
    assert_eq!(compare(&doc, &doc), Vec::<Change>::new());
}

// S2: Equal primitive fields produce no change records
#[test]
fn test_equal_primitives_no_change() {
    let old = json!({"a": 1});
    let new = json!({"a": 1});
    assert!(compare(&old, &new).is_empty());
}

// S3: A single new top-level key is reported as exactly one addition
#[test]
fn test_single_added_key() {
    let old = json!({"title": "PRD"});
    let new = json!({"title": "PRD", "status": "draft"});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::added("status", json!("draft"))]);
}

// S4: A single dropped top-level key is reported as exactly one removal
#[test]
fn test_single_removed_key() {
    let old = json!({"title": "PRD", "status": "draft"});
    let new = json!({"title": "PRD"});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::removed("status", json!("draft"))]);
}

// S5: Nested field modification carries the dot-joined path
#[test]
fn test_nested_modification_path() {
    let old = json!({"x": {"y": 1}});
    let new = json!({"x": {"y": 2}});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::modified("x.y", json!(1), json!(2))]);
}

// S6: Deeply nested paths accumulate each level
#[test]
fn test_deep_nesting_path() {
    let old = json!({"mvp": {"plan": {"phase": "alpha"}}});
    let new = json!({"mvp": {"plan": {"phase": "beta"}}});
    let changes = compare(&old, &new);
    assert_eq!(
        changes,
        vec![Change::modified("mvp.plan.phase", json!("alpha"), json!("beta"))]
    );
}

// S7: Reordering an array is not a change
#[test]
fn test_array_reorder_is_not_a_change() {
    let old = json!({"tags": ["x", "y"]});
    let new = json!({"tags": ["y", "x"]});
    assert!(compare(&old, &new).is_empty());
}

// S8: A new array element is reported with the `[]` field marker
#[test]
fn test_array_element_added() {
    let old = json!({"tags": ["x"]});
    let new = json!({"tags": ["x", "y"]});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::added("tags[]", json!("y"))]);
}

// S9: A dropped array element is reported with the `[]` field marker
#[test]
fn test_array_element_removed() {
    let old = json!({"tags": ["x", "y"]});
    let new = json!({"tags": ["x"]});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::removed("tags[]", json!("y"))]);
}

// S10: Within one array, additions are emitted before removals
#[test]
fn test_array_additions_before_removals() {
    let old = json!({"tags": ["a", "b"]});
    let new = json!({"tags": ["b", "c"]});
    let changes = compare(&old, &new);
    assert_eq!(
        changes,
        vec![
            Change::added("tags[]", json!("c")),
            Change::removed("tags[]", json!("a")),
        ]
    );
}

// S11: Duplicate elements collapse under the membership view
#[test]
fn test_array_duplicates_collapse() {
    let old = json!({"tags": ["a", "a"]});
    let new = json!({"tags": ["a"]});
    assert!(compare(&old, &new).is_empty());
}

// S12: Duplicate new elements absent from the old side each emit a record,
// so `field` paths are not unique within one comparison
#[test]
fn test_array_duplicate_additions_emit_per_element() {
    let old = json!({"tags": ["a"]});
    let new = json!({"tags": ["b", "b"]});
    let changes = compare(&old, &new);
    assert_eq!(
        changes,
        vec![
            Change::added("tags[]", json!("b")),
            Change::added("tags[]", json!("b")),
            Change::removed("tags[]", json!("a")),
        ]
    );
    assert_eq!(fields(&changes), vec!["tags[]", "tags[]", "tags[]"]);
}

// S13: Object array elements match by content
#[test]
fn test_array_of_objects_membership() {
    let old = json!({"features": [{"id": 1, "name": "login"}]});
    let new = json!({"features": [{"id": 1, "name": "login"}, {"id": 2, "name": "search"}]});
    let changes = compare(&old, &new);
    assert_eq!(
        changes,
        vec![Change::added("features[]", json!({"id": 2, "name": "search"}))]
    );
}

// S14: Object elements with reordered keys count as different members
#[test]
fn test_array_object_key_order_is_significant() {
    let old = json!({"features": [{"id": 1, "name": "login"}]});
    let new = json!({"features": [{"name": "login", "id": 1}]});
    let changes = compare(&old, &new);
    assert_eq!(
        changes,
        vec![
            Change::added("features[]", json!({"name": "login", "id": 1})),
            Change::removed("features[]", json!({"id": 1, "name": "login"})),
        ]
    );
}

// S15: A field that changes type is a modification, not an error
#[test]
fn test_type_mismatch_is_modification() {
    let old = json!({"estimate": {"weeks": 6}});
    let new = json!({"estimate": "6 weeks"});
    let changes = compare(&old, &new);
    assert_eq!(
        changes,
        vec![Change::modified("estimate", json!({"weeks": 6}), json!("6 weeks"))]
    );
}

// S16: String and number never compare equal, even when they look alike
#[test]
fn test_no_cross_type_coercion() {
    let old = json!({"version": "1"});
    let new = json!({"version": 1});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::modified("version", json!("1"), json!(1))]);
}

// S17: An explicit null value is a value, not an absent key
#[test]
fn test_null_value_vs_value_is_modification() {
    let old = json!({"owner": null});
    let new = json!({"owner": "daria"});
    let changes = compare(&old, &new);
    assert_eq!(changes, vec![Change::modified("owner", json!(null), json!("daria"))]);
}

// S18: A null old document is treated as empty, so every new key is an addition
#[test]
fn test_null_old_document() {
    let changes = compare(&Value::Null, &json!({"a": 1}));
    assert_eq!(changes, vec![Change::added("a", json!(1))]);
}

// S19: A null new document is treated as empty, so every old key is a removal
#[test]
fn test_null_new_document() {
    let changes = compare(&json!({"a": 1}), &Value::Null);
    assert_eq!(changes, vec![Change::removed("a", json!(1))]);
}

// S20: Two null documents have nothing to compare
#[test]
fn test_both_null_documents() {
    assert!(compare(&Value::Null, &Value::Null).is_empty());
}

// S21: A non-mapping root contributes no keys
#[test]
fn test_non_mapping_root_is_empty() {
    let changes = compare(&json!([1, 2]), &json!({"a": 1}));
    assert_eq!(changes, vec![Change::added("a", json!(1))]);
    assert!(compare(&json!("x"), &json!("y")).is_empty());
}

// S22: An empty object versus a populated one reports each key
#[test]
fn test_empty_object_vs_populated() {
    let changes = compare(&json!({}), &json!({"a": 1, "b": 2}));
    assert_eq!(
        changes,
        vec![Change::added("a", json!(1)), Change::added("b", json!(2))]
    );
}

// S23: Change order follows old-document keys first, then new-only keys,
// each in their original order
#[test]
fn test_change_ordering_contract() {
    let old = json!({"b": 1, "z": 2, "c": 3});
    let new = json!({"b": 9, "q": 1, "c": 3, "a": 7});
    let changes = compare(&old, &new);
    assert_eq!(fields(&changes), vec!["b", "z", "q", "a"]);
    assert_eq!(changes[0].kind, ChangeKind::Modified);
    assert_eq!(changes[1].kind, ChangeKind::Removed);
    assert_eq!(changes[2].kind, ChangeKind::Added);
    assert_eq!(changes[3].kind, ChangeKind::Added);
}

// S24: Reversing the comparison swaps additions and removals and flips
// modified values
#[test]
fn test_reversed_comparison_mirrors() {
    let old = prd_v1();
    let new = prd_v2();
    let forward = compare(&old, &new);
    let backward = compare(&new, &old);

    assert_eq!(forward.len(), backward.len());
    for change in &forward {
        let mirrored = match change.kind {
            ChangeKind::Added => Change::removed(
                change.field.clone(),
                change.new.clone().unwrap_or(Value::Null),
            ),
            ChangeKind::Removed => Change::added(
                change.field.clone(),
                change.old.clone().unwrap_or(Value::Null),
            ),
            ChangeKind::Modified => Change::modified(
                change.field.clone(),
                change.new.clone().unwrap_or(Value::Null),
                change.old.clone().unwrap_or(Value::Null),
            ),
        };
        assert!(
            backward.contains(&mirrored),
            "missing mirror of {:?} in reversed comparison",
            change
        );
    }
}

// S25: Repeated runs produce identical output, in memory and serialized
#[test]
fn test_diff_is_deterministic() {
    let old = prd_v1();
    let new = prd_v2();
    let first = compare(&old, &new);
    let second = compare(&old, &new);
    assert_eq!(first, second);
    let s1 = serde_json::to_string(&first).unwrap();
    let s2 = serde_json::to_string(&second).unwrap();
    assert_eq!(s1, s2);
}

// S26: A realistic PRD revision produces the full expected change list
#[test]
fn test_realistic_prd_revision() {
    let changes = compare(&prd_v1(), &prd_v2());
    assert_eq!(
        changes,
        vec![
            Change::modified(
                "background",
                json!("Legacy portal replacement"),
                json!("Legacy portal replacement for external clients"),
            ),
            Change::added("features[]", json!("Build preview")),
            Change::removed("features[]", json!("PRD upload")),
            Change::removed("constraints[]", json!("Must run on-prem")),
            Change::added("timeline", json!("6 weeks")),
        ]
    );
}
