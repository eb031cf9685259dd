//! Record streams and fixed-width record views.
//!
//! A wage-report file is split into lines; every 512-byte line is a record
//! whose first two bytes name its type. All offsets are byte offsets over
//! the raw line, so no decoding happens before slicing.

use crate::layout::Span;
use std::fmt;

/// Length of every well-formed record, in bytes.
pub const RECORD_LEN: usize = 512;

/// Which input a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamOrigin {
    First,
    Second,
}

impl fmt::Display for StreamOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamOrigin::First => write!(f, "File 1"),
            StreamOrigin::Second => write!(f, "File 2"),
        }
    }
}

/// Two-character record type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Submitter
    RA,
    /// Employer
    RE,
    /// Employee wage detail
    RW,
    /// Employee optional
    RO,
    /// Employer totals
    RT,
    /// Employer optional totals
    RU,
    /// Final
    RF,
    /// State wage (pass-through)
    RS,
    /// State totals (pass-through)
    RV,
    /// Any code this tool has no rules for
    Other([u8; 2]),
}

impl RecordType {
    pub fn from_code(code: [u8; 2]) -> Self {
        match &code {
            b"RA" => RecordType::RA,
            b"RE" => RecordType::RE,
            b"RW" => RecordType::RW,
            b"RO" => RecordType::RO,
            b"RT" => RecordType::RT,
            b"RU" => RecordType::RU,
            b"RF" => RecordType::RF,
            b"RS" => RecordType::RS,
            b"RV" => RecordType::RV,
            _ => RecordType::Other(code),
        }
    }

    pub fn code(&self) -> [u8; 2] {
        match self {
            RecordType::RA => *b"RA",
            RecordType::RE => *b"RE",
            RecordType::RW => *b"RW",
            RecordType::RO => *b"RO",
            RecordType::RT => *b"RT",
            RecordType::RU => *b"RU",
            RecordType::RF => *b"RF",
            RecordType::RS => *b"RS",
            RecordType::RV => *b"RV",
            RecordType::Other(code) => *code,
        }
    }

    /// RS and RV records are skipped in both streams.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, RecordType::RS | RecordType::RV)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code();
        write!(f, "{}", String::from_utf8_lossy(&code))
    }
}

/// A borrowed, well-formed 512-byte record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    origin: StreamOrigin,
    index: usize,
    record_type: RecordType,
    bytes: &'a [u8],
}

impl<'a> Record<'a> {
    pub fn origin(&self) -> StreamOrigin {
        self.origin
    }

    /// 1-based line number within its stream.
    pub fn line_number(&self) -> usize {
        self.index + 1
    }

    /// 0-based line index within its stream.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Bytes covered by `span`. Spans come from the layout tables and
    /// always lie within [`RECORD_LEN`].
    pub fn slice(&self, span: Span) -> &'a [u8] {
        &self.bytes[span.start..span.end]
    }
}

/// How a single line of a stream should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Record(Record<'a>),
    /// Wrong-length line in the middle of the stream.
    Malformed { len: usize },
    /// Wrong-length final line, treated as end-of-file padding.
    TrailingPadding,
}

/// One input file split into lines.
#[derive(Debug, Clone)]
pub struct RecordStream {
    origin: StreamOrigin,
    lines: Vec<Vec<u8>>,
}

impl RecordStream {
    /// Split raw file contents into lines.
    ///
    /// `\r\n` is normalized to `\n` before splitting; a lone `\r` is kept.
    /// A trailing newline yields a final empty line, which is counted.
    pub fn from_bytes(origin: StreamOrigin, bytes: &[u8]) -> Self {
        let segments: Vec<&[u8]> = bytes.split(|b| *b == b'\n').collect();
        let last = segments.len() - 1;
        let lines = segments
            .into_iter()
            .enumerate()
            .map(|(i, segment)| match segment.split_last() {
                // Only segments followed by '\n' can end in the '\r' of a CRLF.
                Some((b'\r', head)) if i < last => head.to_vec(),
                _ => segment.to_vec(),
            })
            .collect();
        Self { origin, lines }
    }

    pub fn origin(&self) -> StreamOrigin {
        self.origin
    }

    /// Number of lines, including malformed, pass-through and padding lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(Vec::as_slice)
    }

    /// Classify the line at `index`. Returns `None` past the end.
    pub fn classify(&self, index: usize) -> Option<LineKind<'_>> {
        let line = self.lines.get(index)?;
        if line.len() != RECORD_LEN {
            if index + 1 == self.lines.len() {
                return Some(LineKind::TrailingPadding);
            }
            return Some(LineKind::Malformed { len: line.len() });
        }
        Some(LineKind::Record(Record {
            origin: self.origin,
            index,
            record_type: RecordType::from_code([line[0], line[1]]),
            bytes: line,
        }))
    }
}
