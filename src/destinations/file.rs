//! Append-only file destination

use super::Destination;
use crate::core::{Result, SinkError};
use std::fs::OpenOptions;
use std::path::Path;

impl Destination {
    /// Open `path` for appending, creating it if needed
    ///
    /// The file is not buffered, so every record reaches the file in the
    /// write that produced it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use journal_logger::Destination;
    ///
    /// let destination = Destination::append_file("/var/log/app.log").unwrap();
    /// ```
    pub fn append_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                SinkError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        Ok(Self::named("file", file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_file_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("journal.log");
        fs::write(&path, "<6>existing\n").unwrap();

        let destination = Destination::append_file(&path).expect("Failed to open file");
        destination.write_line(b"<6>appended\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "<6>existing\n<6>appended\n");
        assert_eq!(destination.name(), "file");
    }

    #[test]
    fn test_append_file_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("journal.log");

        let err = Destination::append_file(&path).unwrap_err();
        assert!(matches!(err, SinkError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
