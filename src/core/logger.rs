//! Leveled logging front-end
//!
//! [`Logger`] is the handle application code holds. It carries a V-level,
//! applies the sink's verbosity gate to info events, records the call site
//! and forwards events to its [`LogSink`].

use super::{
    error::Result,
    journal_sink::JournalSink,
    log_sink::{LogSink, RuntimeInfo},
    options::SinkOptions,
    value::Value,
};
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Frames the front-end itself adds between the caller and the sink
const FRONTEND_CALL_DEPTH: i32 = 1;

#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    level: i32,
}

impl Logger {
    /// Attach a front-end to `sink`
    ///
    /// The sink's `init` is called exactly once, here.
    pub fn new<S: LogSink + 'static>(mut sink: S) -> Self {
        sink.init(RuntimeInfo {
            call_depth: FRONTEND_CALL_DEPTH,
        });
        Self {
            sink: Arc::new(sink),
            level: 0,
        }
    }

    fn derived(&self, sink: Box<dyn LogSink>) -> Self {
        Self {
            sink: Arc::from(sink),
            level: self.level,
        }
    }

    /// The V-level info events from this logger are logged at
    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    /// A logger for less important events
    ///
    /// Levels add up: `v(1).v(1)` is `v(2)`. Negative levels count as zero.
    #[must_use]
    pub fn v(&self, level: i32) -> Logger {
        Self {
            sink: Arc::clone(&self.sink),
            level: self.level.saturating_add(level.max(0)),
        }
    }

    /// Whether info events at this logger's level are written
    pub fn enabled(&self) -> bool {
        self.sink.enabled(self.level)
    }

    /// Log an informational event if this logger's level is enabled
    #[track_caller]
    pub fn info(&self, message: &str, kv: &[Value]) {
        if self.enabled() {
            self.sink.info(self.level, Location::caller(), message, kv);
        }
    }

    /// Log an error event; errors are not subject to the V-level gate
    #[track_caller]
    pub fn error(&self, err: Option<&dyn Error>, message: &str, kv: &[Value]) {
        self.sink.error(err, Location::caller(), message, kv);
    }

    #[must_use]
    pub fn with_name(&self, name: &str) -> Logger {
        self.derived(self.sink.with_name(name))
    }

    #[must_use]
    pub fn with_values(&self, kv: &[Value]) -> Logger {
        self.derived(self.sink.with_values(kv))
    }

    /// A logger that reports callers `depth` frames further up
    #[must_use]
    pub fn with_call_depth(&self, depth: usize) -> Logger {
        self.derived(self.sink.with_call_depth(depth))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level).finish()
    }
}

impl Default for Logger {
    fn default() -> Self {
        new()
    }
}

/// A logger writing journal records to standard output
pub fn new() -> Logger {
    Logger::new(JournalSink::new())
}

/// A logger writing journal records as configured by `options`
pub fn new_with_options(options: &SinkOptions) -> Result<Logger> {
    Ok(Logger::new(JournalSink::from_options(options)?))
}
