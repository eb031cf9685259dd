//! Comparison Demonstration
//!
//! Compares two small in-memory submissions and prints what each sink saw.
//!
//! Key concepts illustrated:
//! 1. Building record streams from raw bytes
//! 2. Running the driver against in-memory sinks
//! 3. Alphanumeric validation and address transposition
//! 4. Reading the tallies back from the report

use efw2diff_core::{
    CompareOptions, ComparisonDriver, MemorySink, RecordStream, Reporter, StreamOrigin, Style,
    RECORD_LEN,
};

fn record(code: &str, fill: &[(usize, &str)]) -> Vec<u8> {
    let mut line = code.as_bytes().to_vec();
    line.resize(RECORD_LEN, b' ');
    for (offset, text) in fill {
        line[*offset..*offset + text.len()].copy_from_slice(text.as_bytes());
    }
    line
}

fn file(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = records.join(&b'\n');
    out.push(b'\n');
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== efw2diff Comparison Demo ===\n");

    let first = file(&[
        record("RA", &[(2, "123456789")]),
        record("RE", &[(2, "2025"), (96, "SUITE 400"), (118, "100 MAIN STREET")]),
        record("RW", &[(2, "111223333"), (187, "00000500000")]),
        record("RF", &[(7, "000000001")]),
    ]);
    // Address lines swapped and lower-cased, one wage amount changed.
    let second = file(&[
        record("RA", &[(2, "123456789")]),
        record("RE", &[(2, "2025"), (96, "100 main street"), (118, "suite 400")]),
        record("RS", &[(2, "06")]),
        record("RW", &[(2, "111223333"), (187, "00000500100")]),
        record("RF", &[(7, "000000001")]),
    ]);

    let a = RecordStream::from_bytes(StreamOrigin::First, &first);
    let b = RecordStream::from_bytes(StreamOrigin::Second, &second);

    // ===== Part 1: Default comparison =====
    println!("## Part 1: Numeric sections only\n");

    let mut reporter = Reporter::new(MemorySink::new(), MemorySink::new(), Style::for_platform());
    let report = ComparisonDriver::default().run(&a, &b, &mut reporter)?;
    let (console, _) = reporter.into_sinks();
    for line in console.lines() {
        println!("{}", line);
    }

    // ===== Part 2: Alphanumeric validation =====
    println!("\n## Part 2: With alphanumeric validation\n");

    let driver = ComparisonDriver::new(CompareOptions {
        validate_alphanumeric: true,
    });
    let mut reporter = Reporter::new(MemorySink::new(), MemorySink::new(), Style::plain());
    let strict = driver.run(&a, &b, &mut reporter)?;
    let (_, log) = reporter.into_sinks();
    println!("Log file would contain {} lines", log.lines().len());

    // ===== Part 3: Tallies =====
    println!("\n## Part 3: Tallies\n");

    assert_eq!(report.field_mismatches, strict.field_mismatches);
    println!("{}", strict.to_json()?);

    Ok(())
}
