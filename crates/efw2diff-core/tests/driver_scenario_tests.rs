//! End-to-end driver scenarios over in-memory streams.

mod common;

use common::{file, run, run_alnum, run_with, submission, RecordBuilder};
use efw2diff_core::{CompareOptions, Style};

fn lowercase_content(line: &str) -> String {
    // Keep the type code: it drives alignment and is compared exactly.
    format!("{}{}", &line[..2], line[2..].to_lowercase())
}

#[test]
fn test_identical_streams_produce_no_findings() {
    let bytes = file(&submission());

    for output in [run(&bytes, &bytes), run_alnum(&bytes, &bytes)] {
        assert!(output.report.is_clean());
        assert_eq!(output.report.records_compared, 6);
        assert!(!output.log.contains("does not match"));
        assert_eq!(
            output.log.lines().last().unwrap(),
            "[Info] 0/8 Records contain errors"
        );
    }
}

#[test]
fn test_case_only_differences_never_mismatch() {
    let first = submission();
    let second: Vec<String> = first.iter().map(|l| lowercase_content(l)).collect();

    let output = run_alnum(&file(&first), &file(&second));

    assert_eq!(output.report.field_mismatches, 0);
    assert_eq!(output.report.records_with_errors, 0);
}

#[test]
fn test_swapped_address_lines_are_tolerated() {
    let first = submission();
    let mut second = first.clone();
    second[1] = RecordBuilder::new("RE")
        .put(2, "2025")
        .put(39, "ACME PAYROLL SERVICES")
        .put(96, "100 MAIN STREET")
        .put(118, "SUITE 400")
        .put(140, "SPRINGFIELD")
        .build();
    second[2] = RecordBuilder::new("RW")
        .put(2, "111223333")
        .put(12, "JANE")
        .put(65, "9 elm road")
        .put(87, "APT 2")
        .put(187, "00000500000")
        .build();

    let output = run_alnum(&file(&first), &file(&second));

    assert!(output.report.is_clean(), "{:?}", output.log.lines());
}

#[test]
fn test_swapped_and_altered_address_still_flagged() {
    let first = submission();
    let mut second = first.clone();
    second[2] = RecordBuilder::new("RW")
        .put(2, "111223333")
        .put(12, "JANE")
        .put(65, "9 ELM ROAD")
        .put(87, "APT 3")
        .put(187, "00000500000")
        .build();

    let output = run_alnum(&file(&first), &file(&second));

    assert_eq!(output.report.records_with_errors, 1);
    assert_eq!(output.report.field_mismatches, 1);
    assert!(output
        .log
        .contains("RW Record in File 1, Line 3 does not match record in File 2, Line 3"));
    assert_eq!(output.log.count("Employee Address:"), 1);
}

#[test]
fn test_address_sections_ignored_without_alphanumeric_mode() {
    let first = submission();
    let mut second = first.clone();
    second[2] = RecordBuilder::new("RW")
        .put(2, "111223333")
        .put(12, "JANET")
        .put(65, "PO BOX 7")
        .put(187, "00000500000")
        .build();

    assert!(run(&file(&first), &file(&second)).report.is_clean());
    assert_eq!(
        run_alnum(&file(&first), &file(&second)).report.field_mismatches,
        3
    );
}

#[test]
fn test_missing_record_reported_once_without_mismatches() {
    let mut first = submission();
    first.insert(3, RecordBuilder::new("RO").put(11, "0000001000").build());
    let second = submission();

    let output = run(&file(&first), &file(&second));

    assert_eq!(output.report.missing_records, 1);
    assert_eq!(output.report.field_mismatches, 0);
    assert_eq!(output.report.extra_records, 0);
    assert_eq!(output.log.count("is missing"), 1);
    assert!(output
        .log
        .contains("[Error] File 2 is missing RO record found in File 1, Line 4"));
}

#[test]
fn test_extra_record_reported_once_and_scan_continues() {
    let first = submission();
    let mut second = submission();
    second.insert(2, RecordBuilder::new("RO").put(11, "0000001000").build());

    let output = run(&file(&first), &file(&second));

    assert_eq!(output.report.extra_records, 1);
    assert_eq!(output.log.count("extra record"), 1);
    assert!(output
        .log
        .contains("[Error] File 2 has an extra record on line 3"));
    assert_eq!(output.report.records_compared, 6);
    assert_eq!(output.report.missing_records, 0);
}

#[test]
fn test_leftover_seen_by_failed_scan_reported_after_walk() {
    let mut first = submission();
    first.push(RecordBuilder::new("RU").put(2, "0000001").build());
    let mut second = submission();
    second.push(RecordBuilder::new("RW").put(2, "999999999").build());

    let output = run(&file(&first), &file(&second));

    // The RU scan steps over the trailing RW and fails; the sweep reports it.
    assert_eq!(output.report.missing_records, 1);
    assert_eq!(output.report.extra_records, 1);
    assert_eq!(output.log.count("File 2 has an extra record on line 8"), 1);
    let lines = output.log.lines();
    let missing = lines.iter().position(|l| l.contains("is missing RU")).unwrap();
    let extra = lines.iter().position(|l| l.contains("extra record")).unwrap();
    assert!(missing < extra);
    assert!(lines.last().unwrap().contains("Records contain errors"));
}

#[test]
fn test_unvisited_tail_of_file_two_is_not_reported() {
    let first = vec![
        RecordBuilder::new("RA").build(),
        RecordBuilder::new("RF").build(),
    ];
    let mut second = first.clone();
    second.push(RecordBuilder::new("RW").build());
    second.push("short".to_string());

    let output = run(&file(&first), &file(&second));

    assert!(output.report.is_clean());
    assert!(!output.log.contains("extra record"));
    assert!(!output.log.contains("wrong length"));
}

#[test]
fn test_record_key_mismatch_points_at_altered_byte() {
    let first = vec![RecordBuilder::new("RE").put(2, &"1".repeat(37)).build()];
    let mut altered = first[0].clone().into_bytes();
    altered[20] = b'7';
    let second = vec![String::from_utf8(altered).unwrap()];

    let output = run(&file(&first), &file(&second));

    assert_eq!(output.report.records_with_errors, 1);
    assert_eq!(output.report.field_mismatches, 1);
    let lines = output.log.lines();
    let header = lines.iter().position(|l| l == "Record Key:").unwrap();
    assert_eq!(lines[header + 1], format!("{}|21{}", "-".repeat(20), "-".repeat(21)));
    assert_eq!(lines[header + 2], first[0][..39]);
    assert_eq!(lines[header + 3], second[0][..39]);
}

#[test]
fn test_amount_mismatch_counts_record_once() {
    let first = submission();
    let mut second = first.clone();
    second[4] = RecordBuilder::new("RW")
        .put(2, "444556666")
        .put(12, "JOHN")
        .put(187, "00000420001")
        .put(300, "1")
        .build();

    let output = run(&file(&first), &file(&second));

    assert_eq!(output.report.records_with_errors, 1);
    assert_eq!(output.report.field_mismatches, 2);
    assert_eq!(output.log.count("Employee Amounts:"), 2);
    assert_eq!(
        output.log.lines().last().unwrap(),
        "[Info] 1/8 Records contain errors"
    );
}

#[test]
fn test_trailing_short_line_is_benign_but_mid_stream_is_not() {
    let mut first = submission();
    first.push("   ".to_string());
    // No newline after the short line, so it is the stream's last line.
    let bytes = first.join("\n").into_bytes();

    let trailing = run(&bytes, &file(&submission()));
    assert_eq!(trailing.report.malformed_first, 0);
    assert!(!trailing.log.contains("wrong length"));

    let mut mid = submission();
    mid.insert(1, "short".to_string());
    let output = run(&file(&mid), &file(&mid));
    assert_eq!(output.report.malformed_first, 1);
    assert_eq!(output.report.malformed_second, 1);
    assert!(output
        .log
        .contains("[Error] File 1 line 2 is the wrong length (5 bytes)"));
    assert!(output
        .log
        .contains("[Error] File 2 line 2 is the wrong length (5 bytes)"));
}

#[test]
fn test_summary_denominator_counts_every_line_of_file_one() {
    let mut first = submission();
    first.insert(2, "bad".to_string());
    let second = submission();

    let output = run(&file(&first), &file(&second));

    // 7 records + 1 malformed line + the empty line after the final newline.
    assert_eq!(output.report.total_lines, 9);
    assert_eq!(
        output.log.lines().last().unwrap(),
        "[Info] 0/9 Records contain errors"
    );
}

#[test]
fn test_submitter_records_logged_verbatim() {
    let first = submission();
    let output = run(&file(&first), &file(&first));

    let lines = output.log.lines();
    let at = lines
        .iter()
        .position(|l| l == "[Info] Submitter records:")
        .unwrap();
    assert_eq!(lines[at + 1], "File 1:");
    assert_eq!(lines[at + 2], first[0]);
    assert_eq!(lines[at + 3], "File 2:");
    assert_eq!(lines[at + 4], first[0]);
}

#[test]
fn test_console_is_styled_and_log_is_plain() {
    let first = submission();
    let mut second = first.clone();
    second[6] = RecordBuilder::new("RF").put(7, "000000003").build();

    let output = run_with(
        &file(&first),
        &file(&second),
        CompareOptions::default(),
        Style::ansi(),
    );

    assert!(output.console.contains("\x1b[41m3\x1b[0m"));
    assert!(output.console.contains("\x1b[31m[Error] \x1b[0mRF Record"));
    assert!(!output.log.lines().iter().any(|l| l.contains('\x1b')));
    assert!(output.log.contains("Total Record Count:"));
}

#[test]
fn test_crlf_input_matches_lf_input() {
    let lf = file(&submission());
    let crlf = String::from_utf8(lf.clone())
        .unwrap()
        .replace('\n', "\r\n")
        .into_bytes();

    let output = run(&lf, &crlf);

    assert!(output.report.is_clean());
}

#[test]
fn test_reordered_streams_report_later_records_missing() {
    // Greedy forward-only alignment: once RE is matched past RW, the RW
    // in File 1 has nothing left to match.
    let re = RecordBuilder::new("RE").build();
    let rw = RecordBuilder::new("RW").build();
    let first = vec![re.clone(), rw.clone()];
    let second = vec![rw, re];

    let output = run(&file(&first), &file(&second));

    assert_eq!(output.report.extra_records, 1);
    assert_eq!(output.report.missing_records, 1);
    assert!(output
        .log
        .contains("File 2 is missing RW record found in File 1, Line 2"));
}
