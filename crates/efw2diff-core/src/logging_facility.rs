//! Structured logging facility for efw2diff
//!
//! Diagnostics about a run (what was compared, how long it took, which
//! pre-flight step failed) go through `tracing`. The comparison report
//! itself is written through [`crate::sink`] and never through this module.
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use efw2diff_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
