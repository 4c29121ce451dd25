//! Core diagnostics and utility layer for the renderkit example.
//!
//! This crate provides the cross-cutting pieces the example shares:
//! - Leveled logging with a console destination and an optional file sink
//! - Native result-code checking (log-and-continue or log-and-fail)
//! - Scoped timing instrumentation
//! - Bit-flag, string, and vector/matrix math helpers

mod check;
mod error;
pub mod flags;
pub mod logging;
pub mod math;
pub mod strings;
mod timer;

pub use check::{ensure_success, log_on_failure, ResultCode};
pub use error::{Error, Result};
pub use flags::{flags_and, flags_or, has_flag};
pub use logging::{
    init_logging, log_error, log_info, log_set_file_path, log_warning, logger, LogRecord, Logger,
    Origin, Severity,
};
pub use timer::{ScopedTimer, Timer};
