//! Core types shared across redline crates
//!
//! This crate provides foundational types used by the diff and change-log
//! facilities:
//!
//! - **Identifier types**: ProjectId, DocumentId, UserId
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging

pub mod ids;
pub mod schema;

pub use ids::{DocumentId, ProjectId, UserId};
