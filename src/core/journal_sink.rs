//! The journal sink
//!
//! A [`JournalSink`] is one immutable snapshot of logger state: verbosity,
//! call depth, name prefix and inherited values, plus the shared destination,
//! caller resolver and metrics. Deriving a named, valued or deeper sink
//! clones the snapshot and changes only the clone.
//!
//! Records are rendered by [`Line`] and written with a single write. Write
//! errors are counted in [`SinkMetrics`] and otherwise ignored, so logging
//! never fails the caller.

use super::{
    caller::{BacktraceCallerResolver, CallerLocation, CallerResolver},
    error::Result,
    key_values::KeyValues,
    line::Line,
    log_sink::{LogSink, RuntimeInfo},
    metrics::SinkMetrics,
    options::SinkOptions,
    severity::Severity,
    value::Value,
};
use crate::destinations::Destination;
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

#[derive(Clone)]
pub struct JournalSink {
    level: i32,
    depth: usize,
    prefix: String,
    values: KeyValues,
    destination: Destination,
    log_caller_info: bool,
    resolver: Arc<dyn CallerResolver>,
    metrics: Arc<SinkMetrics>,
}

impl JournalSink {
    /// A sink with default options writing to standard output
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Build a sink from options, opening the configured output
    pub fn from_options(options: &SinkOptions) -> Result<Self> {
        Ok(Self::builder().options(options)?.build())
    }

    #[must_use]
    pub fn builder() -> JournalSinkBuilder {
        JournalSinkBuilder::new()
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn values(&self) -> &KeyValues {
        &self.values
    }

    pub fn log_caller_info(&self) -> bool {
        self.log_caller_info
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Counters shared by this sink and everything derived from its root
    pub fn metrics(&self) -> Arc<SinkMetrics> {
        Arc::clone(&self.metrics)
    }

    /// A sink whose name has `name` appended, separated by `/`
    #[must_use]
    pub fn with_name(&self, name: &str) -> JournalSink {
        let mut sink = self.clone();
        if !sink.prefix.is_empty() {
            sink.prefix.push('/');
        }
        sink.prefix.push_str(name);
        sink
    }

    /// A sink with `kv` merged into its inherited values
    #[must_use]
    pub fn with_values(&self, kv: &[Value]) -> JournalSink {
        let mut sink = self.clone();
        sink.values = self.values.merge(kv);
        sink
    }

    /// A sink that skips `depth` more frames when resolving the caller
    #[must_use]
    pub fn with_call_depth(&self, depth: usize) -> JournalSink {
        let mut sink = self.clone();
        sink.depth += depth;
        sink
    }

    fn caller(&self, site: &'static Location<'static>) -> Option<CallerLocation> {
        self.resolver.resolve(site, self.depth)
    }

    fn emit(&self, line: Line) {
        match self.destination.write_line(&line.into_bytes()) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }
}

impl LogSink for JournalSink {
    fn init(&mut self, info: RuntimeInfo) {
        if let Ok(depth) = usize::try_from(info.call_depth) {
            self.depth += depth;
        }
    }

    fn enabled(&self, level: i32) -> bool {
        level <= self.level
    }

    fn info(&self, _level: i32, site: &'static Location<'static>, message: &str, kv: &[Value]) {
        let mut line = Line::new(Severity::Info);
        line.push_prefix(&self.prefix);
        if self.log_caller_info {
            line.push_caller(self.caller(site).as_ref());
        }
        line.push_message(message);
        line.push_inherited(self.values.rendered());
        line.push_pairs(kv);

        if !line.has_data() {
            self.metrics.record_suppressed();
            return;
        }
        self.emit(line);
    }

    fn error(
        &self,
        err: Option<&dyn Error>,
        site: &'static Location<'static>,
        message: &str,
        kv: &[Value],
    ) {
        let mut line = Line::new(Severity::Error);
        line.push_prefix(&self.prefix);
        line.push_caller(self.caller(site).as_ref());
        line.push_error(err);
        line.push_message(message);
        line.push_inherited(self.values.rendered());
        line.push_pairs(kv);
        self.emit(line);
    }

    fn with_name(&self, name: &str) -> Box<dyn LogSink> {
        Box::new(JournalSink::with_name(self, name))
    }

    fn with_values(&self, kv: &[Value]) -> Box<dyn LogSink> {
        Box::new(JournalSink::with_values(self, kv))
    }

    fn with_call_depth(&self, depth: usize) -> Box<dyn LogSink> {
        Box::new(JournalSink::with_call_depth(self, depth))
    }
}

impl Default for JournalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JournalSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalSink")
            .field("level", &self.level)
            .field("depth", &self.depth)
            .field("prefix", &self.prefix)
            .field("values", &self.values)
            .field("destination", &self.destination)
            .field("log_caller_info", &self.log_caller_info)
            .finish()
    }
}

/// Builder for constructing a root [`JournalSink`]
///
/// # Example
/// ```
/// use journal_logger::prelude::*;
///
/// let buffer = MemoryBuffer::new();
/// let sink = JournalSink::builder()
///     .verbosity(2)
///     .log_caller_info(false)
///     .destination(buffer.destination())
///     .build();
///
/// let logger = Logger::new(sink);
/// logger.v(1).info("ready", kv!["port", 8080]);
/// assert_eq!(buffer.contents(), "<6>ready, port: 8080\n");
/// ```
pub struct JournalSinkBuilder {
    call_depth: i32,
    verbosity: i32,
    log_caller_info: bool,
    destination: Option<Destination>,
    resolver: Option<Arc<dyn CallerResolver>>,
    metrics: Option<Arc<SinkMetrics>>,
}

impl JournalSinkBuilder {
    pub fn new() -> Self {
        Self {
            call_depth: 0,
            verbosity: 0,
            log_caller_info: true,
            destination: None,
            resolver: None,
            metrics: None,
        }
    }

    /// Extra frames to skip when resolving callers; negative means zero
    #[must_use = "builder methods return a new value"]
    pub fn call_depth(mut self, call_depth: i32) -> Self {
        self.call_depth = call_depth;
        self
    }

    /// Highest V-level to emit; negative means zero
    #[must_use = "builder methods return a new value"]
    pub fn verbosity(mut self, verbosity: i32) -> Self {
        self.verbosity = verbosity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_caller_info(mut self, enabled: bool) -> Self {
        self.log_caller_info = enabled;
        self
    }

    /// Where records are written; standard output if not set
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn resolver<R: CallerResolver + 'static>(self, resolver: R) -> Self {
        self.shared_resolver(Arc::new(resolver))
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_resolver(mut self, resolver: Arc<dyn CallerResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Count into existing metrics instead of a fresh set
    #[must_use = "builder methods return a new value"]
    pub fn metrics(mut self, metrics: Arc<SinkMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Apply every field of `options`, opening its output
    pub fn options(self, options: &SinkOptions) -> Result<Self> {
        let destination = options.output.open()?;
        Ok(self
            .call_depth(options.call_depth)
            .verbosity(options.verbosity)
            .log_caller_info(options.log_caller_info)
            .destination(destination))
    }

    /// Build the root sink
    ///
    /// The root skips one frame for its own entry point on top of the
    /// configured call depth.
    pub fn build(self) -> JournalSink {
        JournalSink {
            level: self.verbosity.max(0),
            depth: self.call_depth.max(0) as usize + 1,
            prefix: String::new(),
            values: KeyValues::new(),
            destination: self.destination.unwrap_or_default(),
            log_caller_info: self.log_caller_info,
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(BacktraceCallerResolver)),
            metrics: self.metrics.unwrap_or_default(),
        }
    }
}

impl Default for JournalSinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
