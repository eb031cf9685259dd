use efw2diff_core::errors::{Efw2Error, ExError, ExErrorKind};
use std::io;
use std::path::{Path, PathBuf};

#[test]
fn test_unreadable_input_verifiable_by_kind() {
    let err = Efw2Error::InputUnreadable {
        label: "File 1".to_string(),
        path: PathBuf::from("w2_a.txt"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.code(), "ERR_IO");
    assert_eq!(ex_err.op(), Some("load_input"));
    assert_eq!(ex_err.path(), Some(Path::new("w2_a.txt")));
    assert!(ex_err.message().starts_with("Error opening File 1"));
}

#[test]
fn test_log_file_clash_distinct_from_io() {
    let err = Efw2Error::LogFileIsInput {
        path: PathBuf::from("efw2.log"),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_ne!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.op(), Some("open_log"));
}

#[test]
fn test_sink_failure_from_io_error() {
    let err: Efw2Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
    assert!(matches!(err, Efw2Error::SinkWrite { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.op(), Some("write_report"));
    assert!(ex_err.path().is_none());
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_display_carries_code_op_and_path() {
    let ex_err = ExError::new(ExErrorKind::Io)
        .with_op("open_log")
        .with_path("logs/efw2.log")
        .with_message("Couldn't open log file: denied");

    assert_eq!(
        ex_err.to_string(),
        "[ERR_IO] in operation 'open_log': Couldn't open log file: denied (path: logs/efw2.log)"
    );
}
