//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failures inside writers and configuration parsing.
///
/// The logging calls themselves never return these; writers report them on
/// stderr and the record is dropped.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unrecognized level name
    #[error("Invalid log level: '{name}'")]
    InvalidLevel { name: String },

    /// Unrecognized output format name
    #[error("Invalid log format: '{name}'")]
    InvalidFormat { name: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel { name: name.into() }
    }

    pub fn invalid_format(name: impl Into<String>) -> Self {
        LoggerError::InvalidFormat { name: name.into() }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::invalid_level("bogus").to_string(),
            "Invalid log level: 'bogus'"
        );
        assert_eq!(
            LoggerError::invalid_format("xml").to_string(),
            "Invalid log format: 'xml'"
        );
        assert_eq!(
            LoggerError::writer("closed").to_string(),
            "Writer error: closed"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing record", "stdout unavailable", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing record"));
        assert!(err.to_string().contains("stdout unavailable"));
    }
}
