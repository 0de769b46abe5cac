//! Line assembly
//!
//! A [`Line`] is built fragment by fragment, each fragment followed by a
//! two-character separator. [`Line::into_bytes`] then trims the last
//! separator so the record ends in exactly one `\n`:
//!
//! ```text
//! <severity>[prefix: ][file: line, ][error, ][message, ][inherited][call-site]\n
//! ```

use super::caller::CallerLocation;
use super::key_values::PAIR_SEPARATORS;
use super::severity::Severity;
use super::value::{push_rendered, push_sanitized, Value, NIL_MARKER};
use std::fmt::Write as _;

const LINE_CAPACITY: usize = 512;

/// Printed when the caller could not be resolved
pub const UNKNOWN_CALLER: &str = "???: 0";

#[derive(Debug)]
pub struct Line {
    buf: String,
    has_data: bool,
}

impl Line {
    pub fn new(severity: Severity) -> Self {
        let mut buf = String::with_capacity(LINE_CAPACITY);
        buf.push_str(severity.code());
        Self {
            buf,
            has_data: false,
        }
    }

    pub fn push_prefix(&mut self, prefix: &str) {
        if !prefix.is_empty() {
            push_sanitized(&mut self.buf, prefix);
            self.buf.push_str(": ");
        }
    }

    pub fn push_caller(&mut self, caller: Option<&CallerLocation>) {
        match caller {
            Some(location) => {
                push_sanitized(&mut self.buf, location.basename());
                let _ = write!(self.buf, ": {}, ", location.line);
            }
            None => {
                self.buf.push_str(UNKNOWN_CALLER);
                self.buf.push_str(", ");
            }
        }
    }

    pub fn push_error(&mut self, err: Option<&dyn std::error::Error>) {
        match err {
            Some(err) => push_sanitized(&mut self.buf, &err.to_string()),
            None => self.buf.push_str(NIL_MARKER),
        }
        self.buf.push_str(", ");
    }

    pub fn push_message(&mut self, message: &str) {
        if !message.is_empty() {
            push_sanitized(&mut self.buf, message);
            self.buf.push_str(", ");
            self.has_data = true;
        }
    }

    /// Append an already rendered inherited-values string
    pub fn push_inherited(&mut self, rendered: &str) {
        if !rendered.is_empty() {
            self.buf.push_str(rendered);
            self.has_data = true;
        }
    }

    /// Append call-site pairs as `k: v, `; an odd trailing key ends in `: `
    pub fn push_pairs(&mut self, pairs: &[Value]) {
        if pairs.is_empty() {
            return;
        }
        for (i, value) in pairs.iter().enumerate() {
            push_rendered(&mut self.buf, value);
            self.buf.push_str(PAIR_SEPARATORS[i & 1]);
        }
        self.has_data = true;
    }

    /// Whether a message, inherited value or call-site pair was appended
    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// The finished record, trimmed and newline terminated
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.buf.into_bytes();
        terminate(&mut bytes);
        bytes
    }
}

/// Drop the final separator byte and make the new last byte a line feed
///
/// Separators are ASCII, so the byte that gets overwritten is never part
/// of a multi-byte character.
pub fn terminate(buf: &mut Vec<u8>) {
    buf.pop();
    match buf.last_mut() {
        Some(last) if *last != b'\n' => *last = b'\n',
        Some(_) => {}
        None => buf.push(b'\n'),
    }
}
