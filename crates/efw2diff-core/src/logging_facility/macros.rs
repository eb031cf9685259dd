//! Operation boundary macros
//!
//! Every event carries `component` (the calling module), `op` and `event`
//! (`start`, `end` or `end_error`). End events add `duration_ms`; error
//! events add the `err_kind` and `err_code` of the [`ExError`](crate::errors::ExError)
//! that stopped the operation.
//!
//! The driver brackets `compare_streams` with a start event carrying the
//! File 1 line count and mode, and an end event carrying the run's tallies.
//! The CLI only reports pre-flight failures (`load_input`, `open_log`).

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use efw2diff_core::log_op_start;
/// log_op_start!("compare_streams");
/// log_op_start!("compare_streams", total_lines = 12, alphanumeric = false);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = efw2diff_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = efw2diff_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use efw2diff_core::log_op_end;
/// log_op_end!("compare_streams", duration_ms = 42, records_with_errors = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = efw2diff_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = efw2diff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// # Example
///
/// ```
/// # use efw2diff_core::log_op_error;
/// # use efw2diff_core::errors::Efw2Error;
/// # use std::path::PathBuf;
/// let err = Efw2Error::LogFileIsInput {
///     path: PathBuf::from("w2_b.txt"),
/// };
/// log_op_error!("open_log", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = efw2diff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = efw2diff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
