//! Diff output types.

use crate::errors::Efw2Error;
use serde::Serialize;

/// Options that change which sections are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Also compare free-text name, address and info sections.
    pub validate_alphanumeric: bool,
}

/// A section whose bytes differ between the two files.
///
/// Borrows from both records; it lives only until it has been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMismatch<'a> {
    /// Byte offset of the section within the record (0-based)
    pub start: usize,
    /// Section name from the layout table
    pub section: &'a str,
    /// Section bytes from File 1
    pub left: &'a [u8],
    /// Section bytes from File 2
    pub right: &'a [u8],
}

/// Tallies for one comparison run.
///
/// `total_lines` is the raw line count of File 1, including malformed,
/// pass-through and trailing padding lines. It is the denominator of the
/// summary line.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Raw line count of File 1
    pub total_lines: usize,
    /// File 1 records with at least one field mismatch
    pub records_with_errors: usize,
    /// Individual field mismatches across all records
    pub field_mismatches: usize,
    /// Records of File 1 that were aligned with a File 2 record
    pub records_compared: usize,
    /// Wrong-length lines in File 1
    pub malformed_first: usize,
    /// Wrong-length lines in File 2
    pub malformed_second: usize,
    /// File 1 records with no counterpart in File 2
    pub missing_records: usize,
    /// File 2 records that no File 1 record asked for
    pub extra_records: usize,
}

impl ComparisonReport {
    /// Every non-fatal finding, of any kind.
    pub fn total_findings(&self) -> usize {
        self.field_mismatches
            + self.malformed_first
            + self.malformed_second
            + self.missing_records
            + self.extra_records
    }

    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }

    /// The closing summary line, e.g. `2/10 Records contain errors`.
    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} Records contain errors",
            self.records_with_errors, self.total_lines
        )
    }

    /// Pretty-printed JSON form of the tallies.
    pub fn to_json(&self) -> Result<String, Efw2Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
