//! Messages delivered to split consumers

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single log message as seen by a channel registered with
/// [`Logger::split`](crate::Logger::split)
///
/// One message is built per dispatch; every consumer receives its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new() {
        let before = Utc::now();
        let msg = Message::new(LogLevel::CRIT, "disk full");
        let after = Utc::now();

        assert_eq!(msg.level, LogLevel::CRIT);
        assert_eq!(msg.message, "disk full");
        assert!(msg.timestamp >= before && msg.timestamp <= after);
    }

    #[test]
    fn test_message_display() {
        let msg = Message::new(LogLevel::NOTICE, "rule added");
        assert_eq!(msg.to_string(), "NOTICE rule added");
    }

    #[test]
    fn test_message_serde() {
        let msg = Message::new(LogLevel::WARNING, "latency high");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"level\":4"));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
