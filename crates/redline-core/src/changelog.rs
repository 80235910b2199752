//! Change-log records.
//!
//! A [`ChangeLog`] captures one comparison's output together with its
//! provenance: which project and document it belongs to, who triggered it,
//! and when. Callers own storage; this module provides construction and
//! slice queries only.

use crate::diff::{compare, Change};
use crate::{log_op_end, log_op_start};
use chrono::{DateTime, Utc};
use redline_core_types::{DocumentId, ProjectId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

/// Kind of document a change log refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    /// Product Requirements Document
    Prd,
    /// MVP specification generated from a PRD
    MvpSpec,
}

/// A recorded comparison between two versions of a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLog {
    /// Unique identifier for this record
    pub id: String,
    /// Project the document belongs to
    pub project_id: ProjectId,
    /// Kind of document that was compared
    #[serde(rename = "entityType")]
    pub entity_kind: DocumentKind,
    /// Identifier of the compared document
    pub entity_id: DocumentId,
    /// The detected changes, in engine order
    pub changes: Vec<Change>,
    /// When the comparison was recorded
    pub created_at: DateTime<Utc>,
    /// Who triggered the comparison
    pub created_by: UserId,
}

impl ChangeLog {
    /// Wrap an existing change list, stamping a fresh id and timestamp.
    pub fn new(
        project_id: ProjectId,
        entity_kind: DocumentKind,
        entity_id: DocumentId,
        changes: Vec<Change>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            project_id,
            entity_kind,
            entity_id,
            changes,
            created_at: Utc::now(),
            created_by,
        }
    }

    /// Compare two document versions and record the result.
    pub fn record(
        project_id: ProjectId,
        entity_kind: DocumentKind,
        entity_id: DocumentId,
        created_by: UserId,
        old_doc: &Value,
        new_doc: &Value,
    ) -> Self {
        let start = Instant::now();
        log_op_start!("record_change_log", entity_id = entity_id.as_str());

        let changes = compare(old_doc, new_doc);
        let log = Self::new(project_id, entity_kind, entity_id, changes, created_by);

        let duration_ms = start.elapsed().as_millis() as u64;
        log_op_end!(
            "record_change_log",
            duration_ms = duration_ms,
            change_count = log.changes.len()
        );

        log
    }

    /// True when the comparison found no differences.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of recorded changes.
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}

/// All change logs for one project, in input order.
pub fn by_project<'a>(logs: &'a [ChangeLog], project_id: &ProjectId) -> Vec<&'a ChangeLog> {
    logs.iter()
        .filter(|log| &log.project_id == project_id)
        .collect()
}

/// All change logs for one document, in input order.
pub fn by_entity<'a>(
    logs: &'a [ChangeLog],
    entity_kind: DocumentKind,
    entity_id: &DocumentId,
) -> Vec<&'a ChangeLog> {
    logs.iter()
        .filter(|log| log.entity_kind == entity_kind && &log.entity_id == entity_id)
        .collect()
}
