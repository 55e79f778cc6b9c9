//! Serializable logger configuration
//!
//! ```
//! use leveled_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "warning", "include_level": true }"#).unwrap();
//! assert_eq!(config.timeout_ms, 1000);
//! ```

use super::error::{LoggerError, Result};
use super::header::flags;
use super::log_level::{LevelSpec, LogLevel};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time a dispatch waits on each consumer (1 second)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

const ALL_FLAGS: u32 = flags::DATE
    | flags::TIME
    | flags::MICROSECONDS
    | flags::LONG_FILE
    | flags::SHORT_FILE
    | flags::UTC;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Threshold by name (`"notice"`) or number (`5`)
    pub level: LevelSpec,
    /// Prepend the level name to every written line
    pub include_level: bool,
    /// Per-consumer delivery timeout in milliseconds
    pub timeout_ms: u64,
    pub prefix: String,
    /// Header flag bitmask, see [`flags`](crate::flags)
    pub flags: u32,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the level and flag bits without building a logger
    pub fn validate(&self) -> Result<()> {
        self.threshold()?;
        if self.flags & !ALL_FLAGS != 0 {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("unknown flag bits {:#x}", self.flags & !ALL_FLAGS),
            ));
        }
        Ok(())
    }

    /// The configured level, checked as a threshold
    ///
    /// Unlike [`parse_level`](crate::parse_level) this accepts `-1` or
    /// `-1.0` (NULL).
    pub fn threshold(&self) -> Result<LogLevel> {
        match self.level {
            LevelSpec::Integer(-1) => Ok(LogLevel::NULL),
            LevelSpec::Float(f) if f == -1.0 => Ok(LogLevel::NULL),
            ref spec => spec.parse(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelSpec::default(),
            include_level: false,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            prefix: String::new(),
            flags: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.threshold().unwrap(), LogLevel::DEBUG);
        assert!(!config.include_level);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_from_json_by_name_and_number() {
        let config = LoggerConfig::from_json(r#"{"level": "Err"}"#).unwrap();
        assert_eq!(config.threshold().unwrap(), LogLevel::ERR);

        let config = LoggerConfig::from_json(r#"{"level": 6, "timeout_ms": 25}"#).unwrap();
        assert_eq!(config.threshold().unwrap(), LogLevel::INFO);
        assert_eq!(config.timeout(), Duration::from_millis(25));
    }

    #[test]
    fn test_null_threshold() {
        let config = LoggerConfig::from_json(r#"{"level": -1}"#).unwrap();
        assert_eq!(config.threshold().unwrap(), LogLevel::NULL);

        let config = LoggerConfig::from_json(r#"{"level": -1.0}"#).unwrap();
        assert_eq!(config.level, LevelSpec::Float(-1.0));
        assert_eq!(config.threshold().unwrap(), LogLevel::NULL);

        let err = LoggerConfig::from_json(r#"{"level": -1.5}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = LoggerConfig::from_json(r#"{"level": 8}"#).unwrap_err();
        assert_eq!(err.rejected_level(), Some(LogLevel::from_value(8)));

        let err = LoggerConfig::from_json(r#"{"level": "verbose"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }

    #[test]
    fn test_invalid_json_and_flags() {
        let err = LoggerConfig::from_json("{ level: }").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));

        let err = LoggerConfig::from_json(r#"{"verbosity": 3}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));

        let err = LoggerConfig::from_json(r#"{"flags": 1024}"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
