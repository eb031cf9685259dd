//! efw2diff core - structural comparison of EFW2 wage-report files
//!
//! This crate provides everything needed to check that two renderings of
//! the same submission line up field by field:
//! - Record streams split into fixed-width 512-byte records
//! - Per-record-type field layout tables
//! - A forward-only aligner that pairs records across the two files
//! - Case-insensitive section comparison with address transposition tolerance
//! - A position-addressed diff renderer for console and log output
//! - A driver that walks File 1 and tallies every finding

pub mod align;
pub mod diff;
pub mod driver;
pub mod errors;
pub mod layout;
pub mod logging_facility;
pub mod record;
pub mod sink;

// Re-export commonly used types
pub use diff::{CompareOptions, ComparisonReport, FieldMismatch, Style};
pub use driver::ComparisonDriver;
pub use errors::{Efw2Error, ExError, ExErrorKind, Result};
pub use record::{RecordStream, RecordType, StreamOrigin, RECORD_LEN};
pub use sink::{ConsoleSink, LogFile, MemorySink, ReportSink, Reporter};
