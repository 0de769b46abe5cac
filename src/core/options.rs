//! Sink configuration
//!
//! [`SinkOptions`] mirrors the knobs a front-end passes when constructing a
//! sink and can be loaded from JSON:
//!
//! ```
//! use journal_logger::{OutputTarget, SinkOptions};
//!
//! let options = SinkOptions::from_json_str(r#"{ "verbosity": 2, "output": "stderr" }"#).unwrap();
//! assert_eq!(options.verbosity, 2);
//! assert!(options.log_caller_info);
//! assert_eq!(options.output, OutputTarget::Stderr);
//! ```

use super::error::{Result, SinkError};
use crate::destinations::Destination;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkOptions {
    /// Extra frames between the public logging call and the real caller.
    /// Negative values are treated as zero.
    pub call_depth: i32,

    /// Highest V-level that is written. Negative values are treated as zero.
    pub verbosity: i32,

    /// Whether info records carry the caller's file and line. Error records
    /// always do.
    pub log_caller_info: bool,

    /// Where records are written
    pub output: OutputTarget,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            call_depth: 0,
            verbosity: 0,
            log_caller_info: true,
            output: OutputTarget::Stdout,
        }
    }
}

impl SinkOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SinkError::io_operation("reading sink options", path.display().to_string(), e)
        })?;
        Self::from_json_str(&json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    /// Append to a file, creating it if needed
    File(PathBuf),
}

impl OutputTarget {
    /// Open the target as a destination
    pub fn open(&self) -> Result<Destination> {
        match self {
            OutputTarget::Stdout => Ok(Destination::stdout()),
            OutputTarget::Stderr => Ok(Destination::stderr()),
            #[cfg(feature = "file")]
            OutputTarget::File(path) => Destination::append_file(path),
            #[cfg(not(feature = "file"))]
            OutputTarget::File(_) => Err(SinkError::config(
                "OutputTarget",
                "file output requires the `file` feature",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SinkOptions::default();
        assert_eq!(options.call_depth, 0);
        assert_eq!(options.verbosity, 0);
        assert!(options.log_caller_info);
        assert_eq!(options.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options = SinkOptions::from_json_str("{}").unwrap();
        assert_eq!(options, SinkOptions::default());
    }

    #[test]
    fn test_parse_file_target() {
        let options = SinkOptions::from_json_str(
            r#"{ "call_depth": 1, "log_caller_info": false, "output": { "file": "/tmp/app.log" } }"#,
        )
        .unwrap();
        assert_eq!(options.call_depth, 1);
        assert!(!options.log_caller_info);
        assert_eq!(options.output, OutputTarget::File(PathBuf::from("/tmp/app.log")));
    }

    #[test]
    fn test_invalid_json() {
        let err = SinkOptions::from_json_str(r#"{ "verbosity": "high" }"#).unwrap_err();
        assert!(matches!(err, SinkError::JsonError(_)));

        let err = SinkOptions::from_json_str(r#"{ "output": "syslog" }"#).unwrap_err();
        assert!(matches!(err, SinkError::JsonError(_)));
    }

    #[test]
    fn test_roundtrip_through_json() {
        let options = SinkOptions {
            verbosity: 3,
            output: OutputTarget::Stderr,
            ..SinkOptions::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(SinkOptions::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_from_missing_file() {
        let err = SinkOptions::from_json_file("/nonexistent/journal_logger.json").unwrap_err();
        assert!(matches!(err, SinkError::IoOperation { .. }));
    }

    #[test]
    fn test_open_console_targets() {
        assert_eq!(OutputTarget::Stdout.open().unwrap().name(), "stdout");
        assert_eq!(OutputTarget::Stderr.open().unwrap().name(), "stderr");
    }
}
