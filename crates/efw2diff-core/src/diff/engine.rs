//! Section comparison engine.
//!
//! The core entry point is [`compare_records`], which walks a layout table
//! over two aligned records and returns every differing section.

use crate::diff::model::{CompareOptions, FieldMismatch};
use crate::layout::{FieldRule, SectionSpec, Span};
use crate::record::Record;
use std::borrow::Cow;

/// Upper-case valid UTF-8 text, with an ASCII fast path.
fn unicode_upper(text: &str) -> Cow<'_, [u8]> {
    if text.is_ascii() {
        return ascii_upper(text.as_bytes());
    }
    Cow::Owned(text.to_uppercase().into_bytes())
}

fn ascii_upper(bytes: &[u8]) -> Cow<'_, [u8]> {
    if bytes.iter().any(u8::is_ascii_lowercase) {
        Cow::Owned(bytes.to_ascii_uppercase())
    } else {
        Cow::Borrowed(bytes)
    }
}

/// Case-insensitive equality of two sections.
///
/// `left` takes the ASCII fast path when it is pure ASCII; otherwise both
/// sides are upper-cased as Unicode text. When either side is not valid
/// UTF-8 the raw bytes are compared with only ASCII letters folded, so
/// distinct undecodable bytes never compare equal.
pub fn fields_equal(left: &[u8], right: &[u8]) -> bool {
    let (Ok(left_text), Ok(right_text)) = (std::str::from_utf8(left), std::str::from_utf8(right))
    else {
        return left.eq_ignore_ascii_case(right);
    };
    let folded_left = if left.is_ascii() {
        ascii_upper(left)
    } else {
        unicode_upper(left_text)
    };
    folded_left == unicode_upper(right_text)
}

/// Compare one section, returning a mismatch anchored at `start` when the
/// two sides differ.
pub fn compare_section<'a>(
    section: &'a str,
    left: &'a [u8],
    right: &'a [u8],
    start: usize,
) -> Option<FieldMismatch<'a>> {
    if fields_equal(left, right) {
        return None;
    }
    Some(FieldMismatch {
        start,
        section,
        left,
        right,
    })
}

/// Compare an address block whose two sub-fields may be swapped in File 2.
///
/// Each sub-field is resolved on its own: it matches if it equals either
/// its counterpart or, failing that, the other sub-field of File 2. When
/// both probes fail, the mismatch against the other sub-field is kept.
pub fn resolve_address_pair<'a>(
    section: &'a str,
    location: Span,
    delivery: Span,
    left: &Record<'a>,
    right: &Record<'a>,
) -> Vec<FieldMismatch<'a>> {
    [(location, delivery), (delivery, location)]
        .into_iter()
        .filter_map(|(own, other)| {
            let text = left.slice(own);
            if fields_equal(text, right.slice(own)) {
                return None;
            }
            compare_section(section, text, right.slice(other), own.start)
        })
        .collect()
}

/// Compare two records of the same type using `layout`.
///
/// Sections flagged alphanumeric-only are skipped unless
/// [`CompareOptions::validate_alphanumeric`] is set. Mismatches come back
/// in layout order.
pub fn compare_records<'a>(
    layout: &'a [SectionSpec],
    left: &Record<'a>,
    right: &Record<'a>,
    options: CompareOptions,
) -> Vec<FieldMismatch<'a>> {
    let mut mismatches = Vec::new();
    for spec in layout {
        if spec.alphanumeric_only && !options.validate_alphanumeric {
            continue;
        }
        match spec.rule {
            FieldRule::Compare(span) => {
                mismatches.extend(compare_section(
                    spec.name,
                    left.slice(span),
                    right.slice(span),
                    span.start,
                ));
            }
            FieldRule::AddressPair { location, delivery } => {
                mismatches.extend(resolve_address_pair(
                    spec.name, location, delivery, left, right,
                ));
            }
        }
    }
    mismatches
}
