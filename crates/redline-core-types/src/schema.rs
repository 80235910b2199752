//! Canonical schema constants for structured logging and events
//!
//! These constants keep field naming consistent across operations.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_PROJECT_ID: &str = "project_id";
pub const FIELD_ENTITY_ID: &str = "entity_id";
pub const FIELD_ENTITY_KIND: &str = "entity_kind";

// Collection sizes
pub const FIELD_CHANGE_COUNT: &str = "change_count";
pub const FIELD_SECTION_COUNT: &str = "section_count";

// Error fields
pub const FIELD_ERR: &str = "err";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
