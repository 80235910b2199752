//! Redline Core - structural change tracking for review documents
//!
//! This crate provides the document-comparison toolkit used by review
//! workflows over PRDs and MVP specifications:
//! - Structural diff engine producing ordered, field-level change lists
//! - Free-text PRD normalization into comparable structured documents
//! - Change-log records carrying comparison output with provenance
//! - Markdown change summaries for review panels
//! - Serialized-document entry points for content stored as JSON text
//!
//! The comparison core is pure and infallible; errors exist only at the
//! serialized-document boundary.

pub mod changelog;
pub mod diff;
pub mod document;
pub mod errors;
pub mod logging;
pub mod normalize;

// Re-export commonly used types
pub use changelog::{ChangeLog, DocumentKind};
pub use diff::{compare, render_change_summary, Change, ChangeKind};
pub use document::{compare_serialized, parse_document};
pub use errors::{RedlineError, Result};
pub use logging::{init, Profile};
pub use normalize::{normalize_prd, NormalizedPrd};
