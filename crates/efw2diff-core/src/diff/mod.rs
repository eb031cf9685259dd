//! Record diff engine.
//!
//! Compares two aligned records section by section and renders each
//! differing section as a position-addressed block for human review.
//!
//! ## Entry point
//!
//! ```
//! use efw2diff_core::diff::{compare_section, render_mismatch, Style};
//!
//! let mismatch = compare_section("Record Key", b"RE111", b"RE121", 0).unwrap();
//! let block = render_mismatch(&mismatch, Style::plain());
//! assert_eq!(block.log[1], "---|4-----");
//! ```
//!
//! ## Guarantees
//!
//! - **Case tolerance**: letter case never produces a mismatch.
//! - **Address transposition tolerance**: the two address sub-fields of RE
//!   and RW records may appear swapped between files.
//! - **Exact positions**: every mismatch carries the byte offset of its
//!   section, and rendered markers point at 1-based record columns.

pub mod engine;
pub mod model;
pub mod render;

pub use engine::{compare_records, compare_section, fields_equal, resolve_address_pair};
pub use model::{CompareOptions, ComparisonReport, FieldMismatch};
pub use render::{render_mismatch, RenderedDiff, Style};
