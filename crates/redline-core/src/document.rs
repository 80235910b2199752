//! Serialized-document comparison entry point.
//!
//! Document versions are stored as JSON text, so callers often hold two
//! serialized snapshots rather than parsed values. [`compare_serialized`]
//! parses both sides and delegates to the diff engine; it is the only
//! fallible comparison path.

use crate::diff::{compare, Change};
use crate::errors::{RedlineError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use std::time::Instant;

/// Parse serialized document text into a JSON value.
///
/// Empty or whitespace-only text parses as `null`, which the diff engine
/// treats as an empty document.
///
/// # Errors
///
/// - `InvalidDocument` — the text is neither empty nor valid JSON
pub fn parse_document(text: &str) -> Result<Value> {
    parse_side(text, "serialized")
}

/// Compare two serialized document versions.
///
/// # Errors
///
/// - `InvalidDocument` — either side fails to parse; the error names the
///   malformed side (`old` or `new`)
pub fn compare_serialized(old_text: &str, new_text: &str) -> Result<Vec<Change>> {
    let start = Instant::now();
    log_op_start!("compare_serialized");

    let result = parse_side(old_text, "old")
        .and_then(|old_doc| parse_side(new_text, "new").map(|new_doc| compare(&old_doc, &new_doc)));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(changes) => {
            log_op_end!(
                "compare_serialized",
                duration_ms = duration_ms,
                change_count = changes.len()
            );
        }
        Err(err) => {
            log_op_error!("compare_serialized", err, duration_ms = duration_ms);
        }
    }

    result
}

fn parse_side(text: &str, which: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| RedlineError::InvalidDocument {
        which: which.to_string(),
        reason: e.to_string(),
    })
}
