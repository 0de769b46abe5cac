//! Syslog severity levels, as understood by the systemd journal
//!
//! A line written to a journal-captured stream may start with `<N>`, where
//! `N` is one of the priorities from `sd-daemon.h`. The sink only ever emits
//! [`Severity::Error`] and [`Severity::Info`]; the rest are listed for callers
//! that build lines themselves.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// System is unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational
    Info = 6,
    /// Debug-level messages
    Debug = 7,
}

impl Severity {
    /// The `<N>` prefix the journal parses off the start of a line
    pub const fn code(&self) -> &'static str {
        match self {
            Severity::Emergency => "<0>",
            Severity::Alert => "<1>",
            Severity::Critical => "<2>",
            Severity::Error => "<3>",
            Severity::Warning => "<4>",
            Severity::Notice => "<5>",
            Severity::Info => "<6>",
            Severity::Debug => "<7>",
        }
    }
}
