//! Structural document diff.
//!
//! Compares two versions of a structured document and produces an ordered
//! list of field-level changes suitable for change logs and review panels.
//!
//! ## Entry point
//!
//! ```
//! use redline_core::diff::{compare, render_change_summary};
//! use serde_json::json;
//!
//! let old = json!({"title": "PRD v1", "goals": ["ship"]});
//! let new = json!({"title": "PRD v2", "goals": ["ship", "iterate"]});
//! let changes = compare(&old, &new);
//! let summary = render_change_summary(&changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical change lists; change
//!   order follows the documents' own key order (old keys first, then keys
//!   only the new document has).
//! - **Purity**: no I/O, no shared state, neither input is mutated.
//! - **Totality**: every input pair produces a result; type mismatches are
//!   reported as modifications, never as errors. Inputs are owned acyclic
//!   values, so recursion is bounded by the document tree height.
//! - **Array membership semantics**: array contents compare as sets of
//!   canonicalized elements; reordering is not a change and duplicate
//!   elements collapse to a single membership entry.

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::compare;
pub use model::{Change, ChangeKind};
pub use summary::render_change_summary;
