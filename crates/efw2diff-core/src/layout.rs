//! Field layout tables.
//!
//! One static table per comparable record type. Each entry names a section,
//! the byte range it covers and whether it is only compared when
//! alphanumeric validation is enabled. Ranges are half-open and 0-based.

use crate::record::{RecordType, RECORD_LEN};

/// Half-open byte range `[start, end)` within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range from `start` to the end of the record.
    pub const fn to_end(start: usize) -> Self {
        Self {
            start,
            end: RECORD_LEN,
        }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// How a section is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Plain case-insensitive comparison of one range.
    Compare(Span),
    /// Two address sub-fields that producers may populate in either order.
    AddressPair { location: Span, delivery: Span },
}

/// A named section of a record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub rule: FieldRule,
    /// Only compared under alphanumeric validation.
    pub alphanumeric_only: bool,
}

const fn always(name: &'static str, span: Span) -> SectionSpec {
    SectionSpec {
        name,
        rule: FieldRule::Compare(span),
        alphanumeric_only: false,
    }
}

const fn alnum(name: &'static str, span: Span) -> SectionSpec {
    SectionSpec {
        name,
        rule: FieldRule::Compare(span),
        alphanumeric_only: true,
    }
}

const fn address(name: &'static str, location: Span, delivery: Span) -> SectionSpec {
    SectionSpec {
        name,
        rule: FieldRule::AddressPair { location, delivery },
        alphanumeric_only: true,
    }
}

const RE_LAYOUT: &[SectionSpec] = &[
    always("Record Key", Span::new(0, 39)),
    alnum("Employer Name", Span::new(39, 96)),
    address("Employer Address", Span::new(96, 118), Span::new(118, 140)),
    alnum("Employer Address", Span::new(140, 173)),
    alnum("Employer Info", Span::to_end(173)),
];

// [138, 142) is intentionally unchecked.
const RW_LAYOUT: &[SectionSpec] = &[
    always("Record Key", Span::new(0, 12)),
    alnum("Employee Info", Span::new(12, 65)),
    address("Employee Address", Span::new(65, 87), Span::new(87, 109)),
    alnum("Employee Address", Span::new(109, 138)),
    alnum("Employee Info", Span::new(142, 187)),
    always("Employee Amounts", Span::new(187, 264)),
    always("Employee Amounts", Span::new(275, 341)),
    always("Employee Amounts", Span::new(353, 396)),
    always("Employee Amounts", Span::new(407, 484)),
    always("Employee Indicators", Span::to_end(484)),
];

const RO_LAYOUT: &[SectionSpec] = &[always("Employee Amounts", Span::to_end(11))];

const RT_LAYOUT: &[SectionSpec] = &[
    always("Employer Count", Span::new(2, 9)),
    always("Employer Totals", Span::new(9, 114)),
    always("Employer Totals", Span::new(129, 219)),
    always("Employer Totals", Span::to_end(234)),
];

const RU_LAYOUT: &[SectionSpec] = &[
    always("Employer Count", Span::new(2, 9)),
    always("Employer Totals", Span::new(9, 129)),
    always("Employer Totals", Span::new(144, 204)),
    always("Employer Totals", Span::to_end(354)),
];

const RF_LAYOUT: &[SectionSpec] = &[always("Total Record Count", Span::new(7, 16))];

/// Layout for a record type, or `None` when the type is not field-compared
/// (RA, pass-through and unknown types).
pub fn layout_for(record_type: RecordType) -> Option<&'static [SectionSpec]> {
    match record_type {
        RecordType::RE => Some(RE_LAYOUT),
        RecordType::RW => Some(RW_LAYOUT),
        RecordType::RO => Some(RO_LAYOUT),
        RecordType::RT => Some(RT_LAYOUT),
        RecordType::RU => Some(RU_LAYOUT),
        RecordType::RF => Some(RF_LAYOUT),
        RecordType::RA | RecordType::RS | RecordType::RV | RecordType::Other(_) => None,
    }
}
