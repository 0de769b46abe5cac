//! The sink contract
//!
//! A [`LogSink`] receives events from the [`Logger`](super::Logger)
//! front-end after the front-end has applied its V-level gate. Sinks are
//! immutable: the `with_*` methods return a new sink and leave `self`
//! untouched.

use super::value::Value;
use std::error::Error;
use std::panic::Location;

/// Information the front-end passes to a sink when attaching to it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Frames the front-end adds between the caller and the sink.
    /// Negative values are ignored.
    pub call_depth: i32,
}

pub trait LogSink: Send + Sync {
    /// Called once by the front-end before the sink is used
    fn init(&mut self, info: RuntimeInfo);

    /// Whether an info event at `level` should be emitted
    fn enabled(&self, level: i32) -> bool;

    /// Emit an informational event
    ///
    /// `level` is the V-level the event was logged at; the gate has already
    /// been applied.
    fn info(&self, level: i32, site: &'static Location<'static>, message: &str, kv: &[Value]);

    /// Emit an error event; always written
    fn error(
        &self,
        err: Option<&dyn Error>,
        site: &'static Location<'static>,
        message: &str,
        kv: &[Value],
    );

    fn with_name(&self, name: &str) -> Box<dyn LogSink>;

    fn with_values(&self, kv: &[Value]) -> Box<dyn LogSink>;

    /// A sink that reports callers `depth` frames further up the stack
    fn with_call_depth(&self, depth: usize) -> Box<dyn LogSink>;
}
