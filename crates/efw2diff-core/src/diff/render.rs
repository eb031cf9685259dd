//! Position-addressed renderer for field mismatches.
//!
//! A rendered block is four lines:
//!
//! ```text
//! Employer Count:
//! -----|8-----
//! 0000012
//! 0000042
//! ```
//!
//! The ruler marks the first column of every differing run with its
//! 1-based record position. The console copy highlights the runs; the log
//! copy is plain.

use crate::diff::model::FieldMismatch;

/// Extra ruler cells past the field so a marker near the end still fits.
const RULER_SLACK: usize = 5;

/// ANSI select-graphic-rendition codes used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sgr {
    RedText,
    RedBackground,
    BlueText,
    Reset,
}

impl Sgr {
    fn escape(&self) -> &'static str {
        match self {
            Sgr::RedText => "\x1b[31m",
            Sgr::RedBackground => "\x1b[41m",
            Sgr::BlueText => "\x1b[34m",
            Sgr::Reset => "\x1b[0m",
        }
    }
}

/// Whether console output carries ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub const fn ansi() -> Self {
        Self { enabled: true }
    }

    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// ANSI everywhere except Windows consoles.
    pub const fn for_platform() -> Self {
        Self {
            enabled: !cfg!(windows),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Escape sequence for `code`, or the empty string when styling is off.
    pub fn sgr(&self, code: Sgr) -> &'static str {
        if self.enabled {
            code.escape()
        } else {
            ""
        }
    }
}

/// A mismatch rendered for both outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiff {
    pub console: Vec<String>,
    pub log: Vec<String>,
}

/// Per-byte case-insensitive match, treating each byte as a Latin-1 char.
fn bytes_match(a: u8, b: u8) -> bool {
    char::from(a).to_uppercase().eq(char::from(b).to_uppercase())
}

/// Write `marker` into the ruler at `at`, stopping at the first cell an
/// earlier marker already claimed.
fn stamp(ruler: &mut [u8], at: usize, marker: &str) {
    for (offset, ch) in marker.bytes().enumerate() {
        match ruler.get_mut(at + offset) {
            Some(cell) if *cell == b'-' => *cell = ch,
            _ => break,
        }
    }
}

/// Whether `byte` continues a multi-byte UTF-8 sequence.
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Wrap differing runs of `text` in highlight codes.
///
/// A character is highlighted when any of its bytes differs, so escape codes
/// only ever land between whole characters.
fn highlight(text: &[u8], differs: &[bool], style: Style) -> String {
    let on = style.sgr(Sgr::RedBackground).as_bytes();
    let off = style.sgr(Sgr::Reset).as_bytes();
    let mut out = Vec::with_capacity(text.len() + on.len() + off.len());
    let mut in_run = false;
    let mut start = 0;
    while start < text.len() {
        let mut end = start + 1;
        while end < text.len() && is_continuation(text[end]) {
            end += 1;
        }
        let hot = differs[start..end].iter().any(|d| *d);
        if hot != in_run {
            out.extend_from_slice(if hot { on } else { off });
            in_run = hot;
        }
        out.extend_from_slice(&text[start..end]);
        start = end;
    }
    out.extend_from_slice(off);
    String::from_utf8_lossy(&out).into_owned()
}

/// Render a mismatch as a header, ruler and the two highlighted texts.
pub fn render_mismatch(mismatch: &FieldMismatch<'_>, style: Style) -> RenderedDiff {
    let mut ruler = vec![b'-'; mismatch.left.len() + RULER_SLACK];
    let differs: Vec<bool> = mismatch
        .left
        .iter()
        .zip(mismatch.right)
        .map(|(&a, &b)| !bytes_match(a, b))
        .collect();

    let mut in_run = false;
    for (i, &differ) in differs.iter().enumerate() {
        if differ && !in_run {
            stamp(&mut ruler, i, &format!("|{}", mismatch.start + i + 1));
        }
        in_run = differ;
    }

    let header = format!("{}:", mismatch.section);
    let ruler = String::from_utf8_lossy(&ruler).into_owned();
    RenderedDiff {
        console: vec![
            header.clone(),
            ruler.clone(),
            highlight(&mismatch.left[..differs.len()], &differs, style),
            highlight(&mismatch.right[..differs.len()], &differs, style),
        ],
        log: vec![
            header,
            ruler,
            String::from_utf8_lossy(mismatch.left).into_owned(),
            String::from_utf8_lossy(mismatch.right).into_owned(),
        ],
    }
}
