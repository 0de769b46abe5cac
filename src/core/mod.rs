//! Core sink types and traits

pub mod caller;
pub mod error;
pub mod journal_sink;
pub mod key_values;
pub mod line;
pub mod log_sink;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod severity;
pub mod value;

pub use caller::{BacktraceCallerResolver, CallerLocation, CallerResolver, BASE_SKIP_FRAMES};
pub use error::{Result, SinkError};
pub use journal_sink::{JournalSink, JournalSinkBuilder};
pub use key_values::KeyValues;
pub use line::{terminate, Line, UNKNOWN_CALLER};
pub use log_sink::{LogSink, RuntimeInfo};
pub use logger::{new, new_with_options, Logger};
pub use metrics::SinkMetrics;
pub use options::{OutputTarget, SinkOptions};
pub use severity::Severity;
pub use value::{format_verbose, Value, EMPTY_PLACEHOLDER, NIL_MARKER};
