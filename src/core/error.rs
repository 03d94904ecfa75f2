//! Error types for the logger system

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed format spec or argument count mismatch
    #[error("Format error in '{spec}': {message}")]
    Format { spec: String, message: String },

    /// A fan-out logger already holds a child with this name
    #[error("Logger '{name}' is already registered")]
    DuplicateName { name: String },

    /// A fan-out logger holds no child with this name
    #[error("No logger named '{name}' is registered")]
    NotFound { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text that does not name a level
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a format error for `spec`
    pub fn format(spec: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Format {
            spec: spec.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        LoggerError::DuplicateName { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        LoggerError::NotFound { name: name.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }
}

/// Panic payload raised by the default fatal handler.
///
/// After a `Fatal` record has been delivered, a logger without a custom
/// handler unwinds with this value. Callers that need to survive it can
/// `catch_unwind` and downcast the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalCondition {
    pub logger_name: String,
}

impl fmt::Display for FatalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.logger_name.is_empty() {
            write!(f, "A fatal log message was logged")
        } else {
            write!(f, "A fatal log message was logged by '{}'", self.logger_name)
        }
    }
}

impl std::error::Error for FatalCondition {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::duplicate_name("audit");
        assert!(matches!(err, LoggerError::DuplicateName { .. }));

        let err = LoggerError::not_found("audit");
        assert!(matches!(err, LoggerError::NotFound { .. }));

        let err = LoggerError::format("{} {}", "expected 2 arguments, got 1");
        assert!(matches!(err, LoggerError::Format { .. }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::duplicate_name("audit").to_string(),
            "Logger 'audit' is already registered"
        );
        assert_eq!(
            LoggerError::not_found("audit").to_string(),
            "No logger named 'audit' is registered"
        );
        assert_eq!(
            LoggerError::format("{", "unmatched '{'").to_string(),
            "Format error in '{': unmatched '{'"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_fatal_condition_display() {
        let fatal = FatalCondition {
            logger_name: "main".to_string(),
        };
        assert_eq!(fatal.to_string(), "A fatal log message was logged by 'main'");

        let anonymous = FatalCondition {
            logger_name: String::new(),
        };
        assert_eq!(anonymous.to_string(), "A fatal log message was logged");
    }
}
