//! Forward-only record aligner.
//!
//! Finds the next record of a requested type in File 2, starting at the
//! comparison cursor. The scan is greedy and never backtracks, so two
//! streams whose ordering diverges beyond simple insertions and deletions
//! will report later records as missing.

use crate::record::{LineKind, Record, RecordStream, RecordType};

/// Position of the next unread line of File 2.
///
/// Only moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(usize);

impl Cursor {
    pub fn new() -> Self {
        Self(0)
    }

    /// 0-based index of the next line to scan.
    pub fn position(&self) -> usize {
        self.0
    }

    /// Move past the line at `index`.
    pub fn advance_past(&mut self, index: usize) {
        debug_assert!(index >= self.0, "cursor cannot move backwards");
        self.0 = self.0.max(index + 1);
    }
}

/// A File 2 line that a scan stepped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedLine {
    /// Wrong-length line (1-based line number, byte length)
    Malformed { line: usize, len: usize },
    /// Well-formed record of a type nobody asked for
    Extra { line: usize, record_type: RecordType },
}

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<'a> {
    /// The first record of the requested type, if any
    pub matched: Option<Record<'a>>,
    /// Lines stepped over before the match, in stream order
    pub skipped: Vec<SkippedLine>,
    /// Index of the first line the scan did not look at
    pub scanned_to: usize,
}

/// Scan `stream` from `cursor` for the next record of type `target`.
///
/// Pass-through records (RS, RV) and a wrong-length final line are skipped
/// silently. On a match the cursor moves past the matched line; when the
/// stream is exhausted the cursor is left where it was.
pub fn align<'a>(target: RecordType, cursor: &mut Cursor, stream: &'a RecordStream) -> Alignment<'a> {
    let mut skipped = Vec::new();
    let mut index = cursor.position();
    while let Some(kind) = stream.classify(index) {
        match kind {
            LineKind::TrailingPadding => break,
            LineKind::Malformed { len } => skipped.push(SkippedLine::Malformed {
                line: index + 1,
                len,
            }),
            LineKind::Record(record) if record.record_type() == target => {
                cursor.advance_past(index);
                return Alignment {
                    matched: Some(record),
                    skipped,
                    scanned_to: index + 1,
                };
            }
            LineKind::Record(record) if record.record_type().is_pass_through() => {}
            LineKind::Record(record) => skipped.push(SkippedLine::Extra {
                line: index + 1,
                record_type: record.record_type(),
            }),
        }
        index += 1;
    }
    Alignment {
        matched: None,
        skipped,
        scanned_to: index,
    }
}

/// Classify the lines from `cursor` up to `scanned_to` without matching
/// anything.
///
/// Used once File 1 is exhausted to account for lines that a failed scan
/// stepped over but no later scan reached. Lines no scan ever visited are
/// not findings.
pub fn sweep_scanned(cursor: Cursor, scanned_to: usize, stream: &RecordStream) -> Vec<SkippedLine> {
    (cursor.position()..scanned_to.min(stream.line_count()))
        .filter_map(|index| match stream.classify(index)? {
            LineKind::TrailingPadding => None,
            LineKind::Malformed { len } => Some(SkippedLine::Malformed {
                line: index + 1,
                len,
            }),
            LineKind::Record(record) if record.record_type().is_pass_through() => None,
            LineKind::Record(record) => Some(SkippedLine::Extra {
                line: index + 1,
                record_type: record.record_type(),
            }),
        })
        .collect()
}
