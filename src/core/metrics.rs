//! Sink metrics
//!
//! Write failures are never reported to the code that logged: a failing
//! destination must not fail the caller. The counters here are the only
//! place such failures become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every snapshot derived from one root sink
///
/// # Example
///
/// ```
/// use journal_logger::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
///
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Lines handed to the destination without error
    lines_written: AtomicU64,

    /// Lines the destination refused; the line is lost
    write_failures: AtomicU64,

    /// Info events dropped because they carried no message or values
    suppressed_events: AtomicU64,
}

impl SinkMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            suppressed_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_events(&self) -> u64 {
        self.suppressed_events.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write, returning the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a suppressed event, returning the previous count
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Get the write failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been written yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.suppressed_events.store(0, Ordering::Relaxed);
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinkMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            suppressed_events: AtomicU64::new(self.suppressed_events()),
        }
    }
}
