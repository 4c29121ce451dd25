//! Native result-code checking built on the logging facility.
//!
//! Two tiers let call sites choose how a failed native call propagates:
//! [`log_on_failure`] for degrade-and-continue sites (the caller branches
//! on the returned boolean) and [`ensure_success`] for sites that abort
//! the surrounding operation by returning an [`Error`] the caller
//! propagates with `?`. Both tiers funnel through one Error-level log
//! emission, so failures are never silent and never double-logged.

use std::fmt;

use crate::error::{Error, Result};
use crate::logging::{logger, Logger};

/// An opaque native status value (OS or graphics API result code).
///
/// Only the success predicate and the `Display` rendering are meaningful
/// to the diagnostics layer; everything else about the code is the
/// caller's business.
pub trait ResultCode: fmt::Display {
    /// Whether this code reports success.
    fn is_success(&self) -> bool;
}

/// Signed native result codes report failure as a negative value, the
/// convention shared by HRESULT- and VkResult-style APIs.
impl ResultCode for i32 {
    fn is_success(&self) -> bool {
        *self >= 0
    }
}

impl Logger {
    /// Check `code`; on failure emit one Error record and return the
    /// corresponding [`Error`] for the caller to propagate with `?`.
    ///
    /// On success this is a no-op returning `Ok(())`.
    #[track_caller]
    pub fn ensure_success<C: ResultCode>(&self, code: C, message: impl AsRef<str>) -> Result<()> {
        if code.is_success() {
            return Ok(());
        }

        let error = Error::Native {
            message: message.as_ref().to_owned(),
            code: code.to_string(),
        };
        self.error(error.to_string());
        Err(error)
    }

    /// Check `code`; on failure emit one Error record and return `false`.
    ///
    /// Returns `true` with no side effect when `code` reports success.
    /// Never returns an error, so call sites can degrade and continue.
    #[track_caller]
    pub fn log_on_failure<C: ResultCode>(&self, code: C, message: impl AsRef<str>) -> bool {
        self.ensure_success(code, message).is_ok()
    }
}

/// Check `code` against the process-wide logger, propagating failures.
///
/// See [`Logger::ensure_success`].
#[track_caller]
pub fn ensure_success<C: ResultCode>(code: C, message: impl AsRef<str>) -> Result<()> {
    logger().ensure_success(code, message)
}

/// Check `code` against the process-wide logger; `false` on failure.
///
/// See [`Logger::log_on_failure`].
#[track_caller]
pub fn log_on_failure<C: ResultCode>(code: C, message: impl AsRef<str>) -> bool {
    logger().log_on_failure(code, message)
}
