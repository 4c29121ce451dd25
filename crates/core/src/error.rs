//! Error types for the diagnostics layer.

use thiserror::Error;

/// Error type for diagnosed failures.
///
/// The only component that constructs these is the result-code checker;
/// everything else in this crate either degrades silently (the log sink)
/// or reports through a boolean (`strings::remove_quotes`).
#[derive(Error, Debug)]
pub enum Error {
    /// A native graphics/OS call reported a failure code.
    ///
    /// The rendering of this variant is exactly the message portion of the
    /// Error record logged before the error was returned, so post-mortem
    /// logs always contain the root cause.
    #[error("{message} (native result code {code})")]
    Native {
        /// Human-readable operation label supplied at the call site.
        message: String,
        /// Textual rendering of the native result code.
        code: String,
    },
}

/// Result type alias using the diagnostics layer's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
