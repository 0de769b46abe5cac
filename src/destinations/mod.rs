//! Output destinations
//!
//! A [`Destination`] is a cheaply clonable handle to one writable stream.
//! Every snapshot derived from a root sink holds a clone of the same handle.
//! Each record is written under the handle's lock with a single
//! `write_all`, so records from different threads never interleave.

#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use memory::MemoryBuffer;

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct Destination {
    name: &'static str,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Destination {
    /// Wrap any writer
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("custom", writer)
    }

    pub(crate) fn named<W: Write + Send + 'static>(name: &'static str, writer: W) -> Self {
        Self {
            name,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Process standard output, the default destination
    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    /// Process standard error
    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Whether both handles write to the same stream
    pub fn same_as(&self, other: &Destination) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Write one finished record
    ///
    /// The sink discards the result; it is returned so the sink can count
    /// failures.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line)?;
        writer.flush()
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination").field("name", &self.name).finish()
    }
}
