//! Compare command
//!
//! Usage: efw2diff-cli <FILE1> <FILE2> [--alphanumeric] [--log-file <PATH>]
//!
//! Every fatal condition is checked before the comparison starts: both
//! inputs must be readable and the log file must be creatable. Once the
//! driver runs, findings are reported and the command succeeds.

use clap::{Args, ValueEnum};
use efw2diff_core::errors::{Efw2Error, ExError, Result};
use efw2diff_core::sink::DEFAULT_LOG_PATH;
use efw2diff_core::{
    log_op_error, CompareOptions, ComparisonDriver, ConsoleSink, LogFile, RecordStream, Reporter,
    StreamOrigin, Style,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference file (File 1)
    pub first: PathBuf,

    /// File checked against the reference (File 2)
    pub second: PathBuf,

    /// Also compare names, addresses and other free-text sections
    #[arg(short, long)]
    pub alphanumeric: bool,

    /// Where to write the plain-text report (truncated on every run)
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    /// Console styling
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print the run's tallies as JSON after the report
    #[arg(long)]
    pub summary_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Styled everywhere except Windows consoles
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn style(self) -> Style {
        match self {
            ColorChoice::Auto => Style::for_platform(),
            ColorChoice::Always => Style::ansi(),
            ColorChoice::Never => Style::plain(),
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<()> {
    let first = load_input(StreamOrigin::First, &args.first)?;
    let second = load_input(StreamOrigin::Second, &args.second)?;
    let log = open_log(&args.log_file, [&args.first, &args.second])?;

    let mut reporter = Reporter::new(ConsoleSink, log, args.color.style());
    let driver = ComparisonDriver::new(CompareOptions {
        validate_alphanumeric: args.alphanumeric,
    });
    let report = driver.run(&first, &second, &mut reporter)?;

    if args.summary_json {
        println!("{}", report.to_json().map_err(ExError::from)?);
    }

    Ok(())
}

fn load_input(origin: StreamOrigin, path: &Path) -> Result<RecordStream> {
    let started = Instant::now();
    match fs::read(path) {
        Ok(bytes) => Ok(RecordStream::from_bytes(origin, &bytes)),
        Err(source) => {
            let err = ExError::from(Efw2Error::InputUnreadable {
                label: origin.to_string(),
                path: path.to_path_buf(),
                source,
            });
            log_op_error!(
                "load_input",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn open_log(path: &Path, inputs: [&PathBuf; 2]) -> Result<LogFile> {
    let started = Instant::now();
    let opened = if is_any_of(path, &inputs) {
        Err(Efw2Error::LogFileIsInput {
            path: path.to_path_buf(),
        })
    } else {
        LogFile::create(path)
    };

    opened.map_err(|err| {
        let err = ExError::from(err);
        log_op_error!(
            "open_log",
            err.clone(),
            duration_ms = started.elapsed().as_millis() as u64
        );
        err
    })
}

/// Whether `path` names the same existing file as one of `inputs`.
fn is_any_of(path: &Path, inputs: &[&PathBuf]) -> bool {
    // A log path that does not exist yet cannot be one of the inputs.
    let Ok(target) = fs::canonicalize(path) else {
        return false;
    };
    inputs
        .iter()
        .filter_map(|input| fs::canonicalize(input).ok())
        .any(|input| input == target)
}
