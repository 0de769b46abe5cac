//! Error types for sink construction
//!
//! Logging itself never fails: every runtime failure is absorbed by the sink
//! and rendered as a visible marker or counted in [`SinkMetrics`](super::SinkMetrics).
//! These errors only surface while building a sink from options.

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error with context
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Options could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl SinkError {
    /// Create an IO operation error with the path it concerned
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        SinkError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SinkError::config("SinkOptions", "unknown output");
        assert!(matches!(err, SinkError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SinkError::io_operation("opening log file", "/var/log/app.log", io_err);
        assert!(matches!(err, SinkError::IoOperation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = SinkError::config("SinkOptions", "unknown output");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for SinkOptions: unknown output"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = SinkError::io_operation("opening log file", "/var/log/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "IO error while opening log file '/var/log/app.log': access denied"
        );
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SinkError::io_operation("reading sink options", "/etc/app.json", io_err);
        let source = err.source().expect("IO errors carry their cause");
        assert_eq!(source.to_string(), "missing");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SinkError = parse_err.into();
        assert!(matches!(err, SinkError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
