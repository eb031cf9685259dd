//! Comparison driver.
//!
//! Walks File 1 in order, aligns each record with File 2, compares the
//! pair with its type's layout and writes every finding to the reporter.
//! Findings never stop the walk; only a failing sink does.

use crate::align::{align, sweep_scanned, Cursor, SkippedLine};
use crate::diff::engine::compare_records;
use crate::diff::model::{CompareOptions, ComparisonReport};
use crate::diff::render::render_mismatch;
use crate::errors::{Efw2Error, ExError, Result};
use crate::layout::layout_for;
use crate::record::{LineKind, RecordStream, RecordType};
use crate::sink::{ReportSink, Reporter};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Owns the comparison options and the File 2 cursor for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonDriver {
    options: CompareOptions,
}

impl ComparisonDriver {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CompareOptions {
        self.options
    }

    /// Compare `first` against `second`, writing findings to `reporter`.
    ///
    /// Always walks File 1 to the end and finishes with the summary line.
    ///
    /// # Errors
    ///
    /// - `Io`: a report sink could not be written or flushed
    pub fn run<C, L>(
        &self,
        first: &RecordStream,
        second: &RecordStream,
        reporter: &mut Reporter<C, L>,
    ) -> Result<ComparisonReport>
    where
        C: ReportSink,
        L: ReportSink,
    {
        let started = Instant::now();
        log_op_start!(
            "compare_streams",
            total_lines = first.line_count(),
            alphanumeric = self.options.validate_alphanumeric
        );

        match self.walk(first, second, reporter) {
            Ok(report) => {
                log_op_end!(
                    "compare_streams",
                    duration_ms = started.elapsed().as_millis() as u64,
                    records_with_errors = report.records_with_errors,
                    field_mismatches = report.field_mismatches,
                    missing_records = report.missing_records,
                    extra_records = report.extra_records
                );
                Ok(report)
            }
            Err(err) => {
                let err = ExError::from(err);
                log_op_error!(
                    "compare_streams",
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn walk<C, L>(
        &self,
        first: &RecordStream,
        second: &RecordStream,
        reporter: &mut Reporter<C, L>,
    ) -> std::result::Result<ComparisonReport, Efw2Error>
    where
        C: ReportSink,
        L: ReportSink,
    {
        let mut report = ComparisonReport {
            total_lines: first.line_count(),
            ..Default::default()
        };
        let mut cursor = Cursor::new();
        // Furthest File 2 line reached by a failed scan.
        let mut scanned_to = 0;

        for index in 0..first.line_count() {
            let record = match first.classify(index) {
                Some(LineKind::Record(record)) => record,
                Some(LineKind::Malformed { len }) => {
                    report.malformed_first += 1;
                    reporter.error(&format!(
                        "File 1 line {} is the wrong length ({} bytes)",
                        index + 1,
                        len
                    ))?;
                    continue;
                }
                Some(LineKind::TrailingPadding) | None => break,
            };
            let record_type = record.record_type();
            if record_type.is_pass_through() {
                continue;
            }

            let alignment = align(record_type, &mut cursor, second);
            let Some(matched) = alignment.matched else {
                // Lines stepped over stay ahead of the cursor for later scans.
                scanned_to = scanned_to.max(alignment.scanned_to);
                report.missing_records += 1;
                reporter.error(&format!(
                    "File 2 is missing {} record found in File 1, Line {}",
                    record_type,
                    record.line_number()
                ))?;
                continue;
            };
            report_skipped(&alignment.skipped, &mut report, reporter)?;
            report.records_compared += 1;
            tracing::debug!(
                record_type = %record_type,
                first_line = record.line_number(),
                second_line = matched.line_number(),
                "aligned record"
            );

            if record_type == RecordType::RA {
                reporter.info(&format!(
                    "Submitter records:\nFile 1:\n{}\nFile 2:\n{}",
                    String::from_utf8_lossy(record.bytes()),
                    String::from_utf8_lossy(matched.bytes())
                ))?;
                continue;
            }
            let Some(layout) = layout_for(record_type) else {
                continue;
            };

            let mismatches = compare_records(layout, &record, &matched, self.options);
            if mismatches.is_empty() {
                continue;
            }
            report.records_with_errors += 1;
            report.field_mismatches += mismatches.len();
            reporter.error(&format!(
                "{} Record in File 1, Line {} does not match record in File 2, Line {}",
                record_type,
                record.line_number(),
                matched.line_number()
            ))?;
            let style = reporter.style();
            for mismatch in &mismatches {
                reporter.diff(&render_mismatch(mismatch, style))?;
            }
        }

        report_skipped(
            &sweep_scanned(cursor, scanned_to, second),
            &mut report,
            reporter,
        )?;
        reporter.info(&report.summary_line())?;
        reporter.flush()?;
        Ok(report)
    }
}

fn report_skipped<C, L>(
    skipped: &[SkippedLine],
    report: &mut ComparisonReport,
    reporter: &mut Reporter<C, L>,
) -> std::result::Result<(), Efw2Error>
where
    C: ReportSink,
    L: ReportSink,
{
    for line in skipped {
        match *line {
            SkippedLine::Malformed { line, len } => {
                report.malformed_second += 1;
                reporter.error(&format!(
                    "File 2 line {} is the wrong length ({} bytes)",
                    line, len
                ))?;
            }
            SkippedLine::Extra { line, .. } => {
                report.extra_records += 1;
                reporter.error(&format!("File 2 has an extra record on line {}", line))?;
            }
        }
    }
    Ok(())
}
