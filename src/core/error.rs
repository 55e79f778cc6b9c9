//! Error types for the logger system

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level out of bounds or unrecognized
    ///
    /// `level` is the best-effort value the input resolved to. For numeric
    /// input this is the rejected number itself, otherwise `LogLevel::NULL`.
    #[error("log level invalid or out of bounds: {input}")]
    InvalidLevel { input: String, level: LogLevel },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error carrying the rejected level
    pub fn invalid_level(input: impl Into<String>, level: LogLevel) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
            level,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// The level a failed parse or construction resolved to, if any
    ///
    /// ```
    /// use leveled_logger::{parse_level, LogLevel};
    ///
    /// let err = parse_level(12).unwrap_err();
    /// assert_eq!(err.rejected_level(), Some(LogLevel::from_value(12)));
    /// ```
    pub fn rejected_level(&self) -> Option<LogLevel> {
        match self {
            LoggerError::InvalidLevel { level, .. } => Some(*level),
            _ => None,
        }
    }
}
