//! # Journal Logger
//!
//! A structured logging sink that writes one syslog-priority-prefixed line
//! per event, in the plain form the systemd journal picks up from a
//! service's standard output.
//!
//! ```text
//! <6>db/pool: pool.rs: 88, connection opened, peer: 10.0.0.7, attempt: 2
//! <3>db/pool: pool.rs: 102, connection refused, dial failed, peer: 10.0.0.7
//! ```
//!
//! ## Features
//!
//! - **Leveled**: V-levels gate info events against a configured verbosity
//! - **Derived loggers**: names and inherited key/values compose immutably
//! - **Caller info**: file basename and line of the logging call, or of a
//!   caller further up the stack for wrappers that add call depth
//! - **Thread Safe**: each record is one write to a shared destination
//!
//! ## Example
//!
//! ```
//! use journal_logger::prelude::*;
//!
//! let buffer = MemoryBuffer::new();
//! let logger = Logger::new(
//!     JournalSink::builder()
//!         .verbosity(1)
//!         .log_caller_info(false)
//!         .destination(buffer.destination())
//!         .build(),
//! );
//!
//! let pool = logger.with_name("db").with_name("pool").with_values(kv!["peer", "10.0.0.7"]);
//! pool.v(1).info("connection opened", kv!["attempt", 2]);
//! pool.v(2).info("dropped by verbosity", &[]);
//!
//! assert_eq!(
//!     buffer.contents(),
//!     "<6>db/pool: connection opened, peer: 10.0.0.7, attempt: 2\n"
//! );
//! ```

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        JournalSink, JournalSinkBuilder, LogSink, Logger, OutputTarget, Severity, SinkError,
        SinkMetrics, SinkOptions, Value,
    };
    pub use crate::destinations::{Destination, MemoryBuffer};
    pub use crate::kv;
}

pub use crate::core::{
    format_verbose, new, new_with_options, terminate, BacktraceCallerResolver, CallerLocation,
    CallerResolver, JournalSink, JournalSinkBuilder, KeyValues, Line, LogSink, Logger,
    OutputTarget, Result, RuntimeInfo, Severity, SinkError, SinkMetrics, SinkOptions, Value,
    BASE_SKIP_FRAMES, EMPTY_PLACEHOLDER, NIL_MARKER, UNKNOWN_CALLER,
};
pub use crate::destinations::{Destination, MemoryBuffer};
