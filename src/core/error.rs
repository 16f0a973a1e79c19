//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

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

    /// Unknown severity name
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },
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

    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("verbose");
        assert_eq!(err.to_string(), "Invalid log level: 'verbose'");

        let err = LoggerError::config("level", "unknown severity");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for level: unknown severity"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "/var/log/app.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("/var/log/app.log"));
    }
}
