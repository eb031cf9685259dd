use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Only pre-flight and sink failures are errors. Malformed, missing and
/// extra records and field mismatches are findings, tallied in the
/// comparison report, and never surface through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus the operation and file path that failed, so
/// the CLI can print a precise message before exiting.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Set the operation name
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the file path involved
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures that abort a run before or during comparison
#[derive(Error, Debug)]
pub enum Efw2Error {
    /// An input file could not be read
    #[error("Error opening {label}: {source}")]
    InputUnreadable {
        label: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be created
    #[error("Couldn't open log file: {source}")]
    LogFileUncreatable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to a report sink failed mid-run
    #[error("Failed to write report line: {source}")]
    SinkWrite {
        #[source]
        source: std::io::Error,
    },

    /// The log file would overwrite one of the inputs
    #[error("Log file {} is also an input file", path.display())]
    LogFileIsInput { path: PathBuf },

    /// The comparison report could not be serialized
    #[error("Failed to serialize report: {message}")]
    Serialization { message: String },
}

impl From<Efw2Error> for ExError {
    fn from(err: Efw2Error) -> Self {
        let message = err.to_string();
        match err {
            Efw2Error::InputUnreadable { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("load_input")
                .with_path(path)
                .with_message(message),

            Efw2Error::LogFileUncreatable { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("open_log")
                .with_path(path)
                .with_message(message),

            Efw2Error::LogFileIsInput { path } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("open_log")
                .with_path(path)
                .with_message(message),

            Efw2Error::SinkWrite { .. } => ExError::new(ExErrorKind::Io)
                .with_op("write_report")
                .with_message(message),

            Efw2Error::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<std::io::Error> for Efw2Error {
    fn from(source: std::io::Error) -> Self {
        Efw2Error::SinkWrite { source }
    }
}

impl From<serde_json::Error> for Efw2Error {
    fn from(err: serde_json::Error) -> Self {
        Efw2Error::Serialization {
            message: err.to_string(),
        }
    }
}
