//! Logging macros for ergonomic key/value lists.
//!
//! Key/value lists are flat: keys and values alternate, and every element
//! is converted with `Value::from`.
//!
//! # Examples
//!
//! ```
//! use journal_logger::prelude::*;
//! use journal_logger::{error, info};
//!
//! let buffer = MemoryBuffer::new();
//! let logger = Logger::new(
//!     JournalSink::builder()
//!         .log_caller_info(false)
//!         .destination(buffer.destination())
//!         .build(),
//! );
//!
//! info!(logger, "Server started", "port", 8080);
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "refused");
//! error!(logger, Some(&err), "Upstream failed", "host", "db-1");
//!
//! let lines = buffer.lines();
//! assert_eq!(lines[0], "<6>Server started, port: 8080");
//! assert!(lines[1].starts_with("<3>"));
//! assert!(lines[1].ends_with(", refused, Upstream failed, host: db-1"));
//! ```

/// Build a key/value slice.
///
/// # Examples
///
/// ```
/// use journal_logger::{kv, Value};
///
/// let pairs: &[Value] = kv!["user", "alice", "attempts", 3];
/// assert_eq!(pairs.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    ($($item:expr),* $(,)?) => {
        &[$($crate::Value::from($item)),*]
    };
}

/// Log an informational event.
///
/// # Examples
///
/// ```
/// # use journal_logger::prelude::*;
/// # let logger = Logger::new(JournalSink::builder().destination(MemoryBuffer::new().destination()).build());
/// use journal_logger::info;
/// info!(logger, "Cache warmed");
/// info!(logger, "Cache warmed", "entries", 1024);
/// info!(logger.v(2), "Evicted", "key", "session:42");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $item:expr)* $(,)?) => {
        $logger.info(::core::convert::AsRef::<str>::as_ref(&$msg), $crate::kv![$($item),*])
    };
}

/// Log an error event.
///
/// # Examples
///
/// ```
/// # use journal_logger::prelude::*;
/// # let logger = Logger::new(JournalSink::builder().destination(MemoryBuffer::new().destination()).build());
/// use journal_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such table");
/// error!(logger, Some(&err), "Query failed", "table", "users");
/// error!(logger, None, "Invariant violated");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $err:expr, $msg:expr $(, $item:expr)* $(,)?) => {
        $logger.error($err, ::core::convert::AsRef::<str>::as_ref(&$msg), $crate::kv![$($item),*])
    };
}
