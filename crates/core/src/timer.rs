//! Frame timing and scoped instrumentation.

use std::time::{Duration, Instant};

use crate::logging::{logger, LogRecord, Logger, Severity};

/// Free-running timer for frame delta timing.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last_tick: Instant,
}

impl Timer {
    /// Start a timer at the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Total elapsed time since construction or the last [`reset`](Self::reset).
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Time since the previous `tick` call (the frame delta in a loop).
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        delta
    }

    /// Restart both the elapsed and tick clocks.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped wall-clock measurement of a named operation.
///
/// Captures a start timestamp at construction and emits exactly one
/// Info-level record of the form `<label> took <duration>` when dropped.
/// The record is emitted on every exit path out of the owning scope:
/// normal fall-through, early `return` / `?`, or unwinding. Multiple
/// instances may coexist and nest freely; each reports independently.
///
/// # Example
///
/// ```
/// use renderkit_core::ScopedTimer;
///
/// {
///     let _timing = ScopedTimer::new("acceleration structure build");
///     // ... the measured work ...
/// } // emits: "acceleration structure build took 1.21ms"
/// ```
pub struct ScopedTimer<'a> {
    label: String,
    timer: Timer,
    logger: &'a Logger,
}

impl ScopedTimer<'static> {
    /// Measure against the process-wide logger.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_logger(label, logger())
    }
}

impl<'a> ScopedTimer<'a> {
    /// Measure against an explicitly provided logger.
    pub fn with_logger(label: impl Into<String>, logger: &'a Logger) -> Self {
        Self {
            label: label.into(),
            timer: Timer::new(),
            logger,
        }
    }

    /// Elapsed time so far, without ending the measurement.
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        let message = format!("{} took {:?}", self.label, self.timer.elapsed());
        self.logger.log(&LogRecord {
            severity: Severity::Info,
            message: &message,
            origin: None,
        });
    }
}
