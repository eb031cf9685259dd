use efw2diff_core::{
    CompareOptions, ComparisonDriver, ComparisonReport, MemorySink, RecordStream, Reporter,
    StreamOrigin, Style, RECORD_LEN,
};

/// Builds one fixed-width record line.
#[allow(dead_code)]
pub struct RecordBuilder {
    bytes: Vec<u8>,
}

#[allow(dead_code)]
impl RecordBuilder {
    /// Record of type `code`, space-padded to 512 bytes.
    pub fn new(code: &str) -> Self {
        let mut bytes = code.as_bytes().to_vec();
        bytes.resize(RECORD_LEN, b' ');
        Self { bytes }
    }

    /// Overwrite bytes starting at a 0-based offset.
    pub fn put(mut self, offset: usize, text: &str) -> Self {
        self.bytes[offset..offset + text.len()].copy_from_slice(text.as_bytes());
        self
    }

    pub fn build(self) -> String {
        String::from_utf8(self.bytes).unwrap()
    }
}

/// Join lines into file contents with a trailing newline.
#[allow(dead_code)]
pub fn file(lines: &[String]) -> Vec<u8> {
    let mut out = lines.join("\n").into_bytes();
    out.push(b'\n');
    out
}

/// Output of one in-memory run.
#[allow(dead_code)]
pub struct RunOutput {
    pub report: ComparisonReport,
    pub console: MemorySink,
    pub log: MemorySink,
}

#[allow(dead_code)]
pub fn run_with(first: &[u8], second: &[u8], options: CompareOptions, style: Style) -> RunOutput {
    let a = RecordStream::from_bytes(StreamOrigin::First, first);
    let b = RecordStream::from_bytes(StreamOrigin::Second, second);
    let mut reporter = Reporter::new(MemorySink::new(), MemorySink::new(), style);
    let report = ComparisonDriver::new(options)
        .run(&a, &b, &mut reporter)
        .unwrap();
    let (console, log) = reporter.into_sinks();
    RunOutput {
        report,
        console,
        log,
    }
}

#[allow(dead_code)]
pub fn run(first: &[u8], second: &[u8]) -> RunOutput {
    run_with(first, second, CompareOptions::default(), Style::plain())
}

#[allow(dead_code)]
pub fn run_alnum(first: &[u8], second: &[u8]) -> RunOutput {
    run_with(
        first,
        second,
        CompareOptions {
            validate_alphanumeric: true,
        },
        Style::plain(),
    )
}

/// A small but complete submission: RA, RE, two RW with RS, RT, RF.
#[allow(dead_code)]
pub fn submission() -> Vec<String> {
    vec![
        RecordBuilder::new("RA").put(2, "123456789").build(),
        RecordBuilder::new("RE")
            .put(2, "2025")
            .put(39, "ACME PAYROLL SERVICES")
            .put(96, "SUITE 400")
            .put(118, "100 MAIN STREET")
            .put(140, "SPRINGFIELD")
            .build(),
        RecordBuilder::new("RW")
            .put(2, "111223333")
            .put(12, "JANE")
            .put(65, "APT 2")
            .put(87, "9 ELM ROAD")
            .put(187, "00000500000")
            .build(),
        RecordBuilder::new("RS").put(2, "06").build(),
        RecordBuilder::new("RW")
            .put(2, "444556666")
            .put(12, "JOHN")
            .put(187, "00000420000")
            .build(),
        RecordBuilder::new("RT").put(2, "0000002").build(),
        RecordBuilder::new("RF").put(7, "000000002").build(),
    ]
}
