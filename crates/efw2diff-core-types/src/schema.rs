//! Canonical schema constants for structured logging and events
//!
//! These constants keep field keys consistent across the driver, the CLI
//! and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Alignment
pub const FIELD_RECORD_TYPE: &str = "record_type";

// Tallies
pub const FIELD_TOTAL_LINES: &str = "total_lines";
pub const FIELD_RECORDS_WITH_ERRORS: &str = "records_with_errors";
pub const FIELD_FIELD_MISMATCHES: &str = "field_mismatches";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
