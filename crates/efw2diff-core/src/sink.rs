//! Report sinks.
//!
//! The comparison report goes to two append-only outputs: the console,
//! which may be styled, and a plain log file. Both are reached through
//! [`ReportSink`] so the driver can be run against in-memory sinks.

use crate::diff::render::{RenderedDiff, Sgr, Style};
use crate::errors::Efw2Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default log file name, created in the working directory.
pub const DEFAULT_LOG_PATH: &str = "efw2.log";

/// An append-only line output.
pub trait ReportSink {
    fn append_line(&mut self, line: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        (**self).append_line(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Standard output.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// The run's log file, truncated when opened and flushed on drop.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogFile {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, Efw2Error> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| Efw2Error::LogFileUncreatable {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for LogFile {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        // Errors here have nowhere to go; explicit flush() reports them.
        let _ = self.writer.flush();
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Number of lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }
}

impl ReportSink for MemorySink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Writes tagged messages and rendered diffs to the console and the log.
///
/// Console lines carry the configured [`Style`]; log lines are always plain.
#[derive(Debug)]
pub struct Reporter<C, L> {
    console: C,
    log: L,
    style: Style,
}

impl<C: ReportSink, L: ReportSink> Reporter<C, L> {
    pub fn new(console: C, log: L, style: Style) -> Self {
        Self {
            console,
            log,
            style,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// `[Info]`-tagged message. Multi-line messages are tagged once.
    pub fn info(&mut self, message: &str) -> Result<(), Efw2Error> {
        self.tagged("[Info]", Sgr::BlueText, message)
    }

    /// `[Error]`-tagged message. Multi-line messages are tagged once.
    pub fn error(&mut self, message: &str) -> Result<(), Efw2Error> {
        self.tagged("[Error]", Sgr::RedText, message)
    }

    /// Write a rendered mismatch block.
    pub fn diff(&mut self, block: &RenderedDiff) -> Result<(), Efw2Error> {
        for line in &block.console {
            self.console.append_line(line)?;
        }
        for line in &block.log {
            self.log.append_line(line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Efw2Error> {
        self.console.flush()?;
        self.log.flush()?;
        Ok(())
    }

    /// Give back both sinks.
    pub fn into_sinks(self) -> (C, L) {
        (self.console, self.log)
    }

    fn tagged(&mut self, tag: &str, color: Sgr, message: &str) -> Result<(), Efw2Error> {
        let mut lines = message.split('\n');
        let first = lines.next().unwrap_or_default();
        self.console.append_line(&format!(
            "{}{} {}{}",
            self.style.sgr(color),
            tag,
            self.style.sgr(Sgr::Reset),
            first
        ))?;
        self.log.append_line(&format!("{} {}", tag, first))?;
        for line in lines {
            self.console.append_line(line)?;
            self.log.append_line(line)?;
        }
        Ok(())
    }
}
