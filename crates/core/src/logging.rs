//! Leveled logging with a console destination and an optional file sink.
//!
//! Console output goes through the `tracing` ecosystem; install the
//! subscriber once at startup with [`init_logging`]. When a sink file has
//! been configured via [`Logger::set_file_path`] (or the process-wide
//! [`log_set_file_path`]), every record is additionally appended to that
//! file as a stable, grep-friendly line:
//!
//! ```text
//! [ERROR] command queue creation failed (src/device.rs:42)
//! ```
//!
//! Failures to open or append the sink file are swallowed and output
//! degrades to console only. The diagnostics path never fails the
//! diagnosed program.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing_subscriber::{fmt as fmt_layer, prelude::*, EnvFilter};

/// Initialize the console logging pipeline.
///
/// This sets up tracing-subscriber with:
/// - Environment-based filtering (RUST_LOG, defaulting to "info")
/// - A fmt layer for human-readable output
///
/// # Example
/// ```no_run
/// renderkit_core::init_logging();
/// tracing::info!("Renderer initialized");
/// ```
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer::layer().with_target(true))
        .init();
}

/// Severity of a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational progress output.
    Info,
    /// Something degraded but the program continues unaffected.
    Warning,
    /// A diagnosed failure; always emitted before any unwinding starts.
    Error,
}

impl Severity {
    /// Stable upper-case tag used in the file sink line format.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location attached to a log record for traceability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Origin {
    /// Source file that produced the record.
    pub file: &'static str,
    /// Line within `file`.
    pub line: u32,
}

impl Origin {
    /// Build an origin from an explicit file and line.
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Origin of the nearest non-`#[track_caller]` caller.
    ///
    /// The convenience emitters use this to tag records with the user call
    /// site rather than a location inside the logging facility.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single log record, created per emit call and consumed immediately.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    /// Record severity.
    pub severity: Severity,
    /// Message text.
    pub message: &'a str,
    /// Optional source location of the emitting call site.
    pub origin: Option<Origin>,
}

impl LogRecord<'_> {
    /// The stable line form written to the file sink.
    fn format_line(&self) -> String {
        match self.origin {
            Some(origin) => format!("[{}] {} ({})", self.severity, self.message, origin),
            None => format!("[{}] {}", self.severity, self.message),
        }
    }
}

/// Leveled logger with a console destination and an optional file sink.
///
/// The sink path is guarded by an [`RwLock`]: configuring and emitting from
/// multiple threads is memory-safe, but ordering between concurrent
/// emitters is unspecified. Single-threaded use inside a frame loop is the
/// intended pattern.
///
/// A process-wide instance is reachable via [`logger`]; the free functions
/// [`log_info`], [`log_warning`], [`log_error`], and [`log_set_file_path`]
/// delegate to it. Construct your own `Logger` to inject one explicitly
/// (tests do this to observe emissions in isolation).
pub struct Logger {
    file_path: RwLock<Option<PathBuf>>,
}

impl Logger {
    /// Create a logger with no file sink (console only).
    pub const fn new() -> Self {
        Self {
            file_path: RwLock::new(None),
        }
    }

    /// Configure the file sink. `None` clears it back to console only.
    ///
    /// The path may be set or reset at any time; records emitted afterwards
    /// are appended to the new destination.
    pub fn set_file_path(&self, path: Option<impl Into<PathBuf>>) {
        let mut guard = self.file_path.write().unwrap_or_else(|e| e.into_inner());
        *guard = path.map(Into::into);
    }

    /// Currently configured sink path, if any.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file_path
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Write one record to the console destination and, when a sink is
    /// configured, append its stable line form to the sink file.
    pub fn log(&self, record: &LogRecord<'_>) {
        let console = match record.origin {
            Some(origin) => format!("{} ({})", record.message, origin),
            None => record.message.to_owned(),
        };
        match record.severity {
            Severity::Info => tracing::info!("{}", console),
            Severity::Warning => tracing::warn!("{}", console),
            Severity::Error => tracing::error!("{}", console),
        }

        if let Some(path) = self.file_path() {
            // Sink failures degrade to console-only output.
            let _ = append_line(&path, &record.format_line());
        }
    }

    /// Emit an Info record tagged with the caller's source location.
    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.emit(Severity::Info, message.as_ref(), Origin::caller());
    }

    /// Emit a Warning record tagged with the caller's source location.
    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.emit(Severity::Warning, message.as_ref(), Origin::caller());
    }

    /// Emit an Error record tagged with the caller's source location.
    ///
    /// There is no separate entry point for caught error values; render
    /// them to text first (`err.to_string()`) and pass the result here.
    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.emit(Severity::Error, message.as_ref(), Origin::caller());
    }

    fn emit(&self, severity: Severity, message: &str, origin: Origin) {
        self.log(&LogRecord {
            severity,
            message,
            origin: Some(origin),
        });
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}

static GLOBAL_LOGGER: Logger = Logger::new();

/// The process-wide logger used by the free emit functions.
pub fn logger() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Emit an Info record through the process-wide logger.
#[track_caller]
pub fn log_info(message: impl AsRef<str>) {
    GLOBAL_LOGGER.info(message);
}

/// Emit a Warning record through the process-wide logger.
#[track_caller]
pub fn log_warning(message: impl AsRef<str>) {
    GLOBAL_LOGGER.warning(message);
}

/// Emit an Error record through the process-wide logger.
#[track_caller]
pub fn log_error(message: impl AsRef<str>) {
    GLOBAL_LOGGER.error(message);
}

/// Configure the process-wide file sink; `None` means console only.
pub fn log_set_file_path(path: Option<impl Into<PathBuf>>) {
    GLOBAL_LOGGER.set_file_path(path);
}
