//! Human-readable summary renderer for change lists.

use crate::diff::model::{Change, ChangeKind};
use serde_json::Value;

/// Maximum characters of a string value shown before truncation.
const MAX_VALUE_CHARS: usize = 100;

/// Render a human-readable Markdown summary of a change list.
///
/// The summary is intended for review panels and approval displays. It is
/// informational only and does not affect the structured change records;
/// long string values are truncated here, never in the engine output.
pub fn render_change_summary(changes: &[Change]) -> String {
    let mut out = String::new();

    // Header
    out.push_str("## Document Changes\n\n");

    if changes.is_empty() {
        out.push_str("_No changes detected. This version is identical to the previous one._\n");
        return out;
    }

    let noun = if changes.len() == 1 { "change" } else { "changes" };
    out.push_str(&format!("**{} {}**\n\n", changes.len(), noun));

    let added: Vec<&Change> = changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Added)
        .collect();
    let removed: Vec<&Change> = changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Removed)
        .collect();
    let modified: Vec<&Change> = changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Modified)
        .collect();

    // Added fields
    if !added.is_empty() {
        out.push_str(&format!("### Added ({})\n\n", added.len()));
        for change in &added {
            out.push_str(&format!(
                "- **{}**: `{}`\n",
                change.field,
                render_value(change.new.as_ref())
            ));
        }
        out.push('\n');
    }

    // Removed fields
    if !removed.is_empty() {
        out.push_str(&format!("### Removed ({})\n\n", removed.len()));
        for change in &removed {
            out.push_str(&format!(
                "- **{}**: `{}`\n",
                change.field,
                render_value(change.old.as_ref())
            ));
        }
        out.push('\n');
    }

    // Modified fields, before → after
    if !modified.is_empty() {
        out.push_str(&format!("### Modified ({})\n\n", modified.len()));
        for change in &modified {
            out.push_str(&format!(
                "- **{}**: `{}` → `{}`\n",
                change.field,
                render_value(change.old.as_ref()),
                render_value(change.new.as_ref())
            ));
        }
        out.push('\n');
    }

    out
}

/// Render a single value for display.
///
/// Strings render bare and are truncated past [`MAX_VALUE_CHARS`];
/// everything else renders as compact JSON.
fn render_value(value: Option<&Value>) -> String {
    match value {
        None => "null".to_string(),
        Some(Value::String(s)) => {
            if s.chars().count() > MAX_VALUE_CHARS {
                let head: String = s.chars().take(MAX_VALUE_CHARS).collect();
                format!("{}...", head)
            } else {
                s.clone()
            }
        }
        Some(other) => serde_json::to_string(other).unwrap_or_default(),
    }
}
