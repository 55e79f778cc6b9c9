//! BSD severity levels
//!
//! Levels follow syslog numbering: `EMERG` (0) is the most urgent and
//! `DEBUG` (7) the most verbose. `NULL` (-1) is only meaningful as a
//! threshold and suppresses every message.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical level names, indexed by level value
pub const LEVEL_NAMES: [&str; 8] = [
    "EMERG", "ALERT", "CRIT", "ERR", "WARNING", "NOTICE", "INFO", "DEBUG",
];

/// Display token for any value outside `EMERG..=DEBUG`
pub const INVALID_NAME: &str = "INVALID";

/// A severity level or threshold
///
/// Stored as a plain integer so that out-of-range values survive parsing
/// and can be reported back to the caller. Lower values are more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(i64);

impl LogLevel {
    /// Discards all output when used as a threshold
    pub const NULL: LogLevel = LogLevel(-1);
    pub const EMERG: LogLevel = LogLevel(0);
    pub const ALERT: LogLevel = LogLevel(1);
    pub const CRIT: LogLevel = LogLevel(2);
    pub const ERR: LogLevel = LogLevel(3);
    pub const WARNING: LogLevel = LogLevel(4);
    pub const NOTICE: LogLevel = LogLevel(5);
    pub const INFO: LogLevel = LogLevel(6);
    pub const DEBUG: LogLevel = LogLevel(7);

    /// The eight levels a message can carry, most urgent first
    pub const ALL: [LogLevel; 8] = [
        LogLevel::EMERG,
        LogLevel::ALERT,
        LogLevel::CRIT,
        LogLevel::ERR,
        LogLevel::WARNING,
        LogLevel::NOTICE,
        LogLevel::INFO,
        LogLevel::DEBUG,
    ];

    /// Wrap a raw value without validation
    #[inline]
    pub const fn from_value(value: i64) -> Self {
        LogLevel(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Canonical name, or `"INVALID"` for anything outside `EMERG..=DEBUG`
    pub const fn as_str(self) -> &'static str {
        if self.is_named() {
            LEVEL_NAMES[self.0 as usize]
        } else {
            INVALID_NAME
        }
    }

    /// True for the eight levels a message may carry
    #[inline]
    pub const fn is_named(self) -> bool {
        self.0 >= LogLevel::EMERG.0 && self.0 <= LogLevel::DEBUG.0
    }

    /// True for values accepted as a logger threshold (`NULL..=DEBUG`)
    #[inline]
    pub const fn is_valid_threshold(self) -> bool {
        self.0 >= LogLevel::NULL.0 && self.0 <= LogLevel::DEBUG.0
    }

    /// Whether a message at this level passes `threshold`
    #[inline]
    pub const fn is_enabled_at(self, threshold: LogLevel) -> bool {
        self.0 <= threshold.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::DEBUG
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        LEVEL_NAMES
            .iter()
            .position(|name| *name == upper)
            .map(|idx| LogLevel(idx as i64))
            .ok_or_else(|| LoggerError::invalid_level(s, LogLevel::NULL))
    }
}

/// A level given either by name or by number
///
/// Deserializes untagged, so configuration files may write `"warning"`,
/// `4` or `4.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    Name(String),
    Integer(i64),
    Float(f64),
}

impl LevelSpec {
    /// Resolve to a level. See [`parse_level`].
    pub fn parse(&self) -> Result<LogLevel> {
        match self {
            LevelSpec::Name(name) => name.parse(),
            LevelSpec::Integer(n) => {
                let level = LogLevel(*n);
                if level.is_named() {
                    Ok(level)
                } else {
                    Err(LoggerError::invalid_level(n.to_string(), level))
                }
            }
            LevelSpec::Float(f) => {
                if f.is_nan() {
                    return Err(LoggerError::invalid_level("NaN", LogLevel::NULL));
                }
                // `as` truncates toward zero and saturates
                let level = LogLevel(*f as i64);
                if (0.0..=LogLevel::DEBUG.0 as f64).contains(f) {
                    Ok(level)
                } else {
                    Err(LoggerError::invalid_level(f.to_string(), level))
                }
            }
        }
    }
}

impl Default for LevelSpec {
    fn default() -> Self {
        LevelSpec::Name(LogLevel::DEBUG.as_str().to_string())
    }
}

impl From<&str> for LevelSpec {
    fn from(s: &str) -> Self {
        LevelSpec::Name(s.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(s: String) -> Self {
        LevelSpec::Name(s)
    }
}

impl From<LogLevel> for LevelSpec {
    fn from(level: LogLevel) -> Self {
        LevelSpec::Integer(level.0)
    }
}

macro_rules! level_spec_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LevelSpec {
                fn from(n: $t) -> Self {
                    LevelSpec::Integer(n as i64)
                }
            }
        )*
    };
}

level_spec_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for LevelSpec {
    fn from(n: u64) -> Self {
        // Past i64::MAX only the float form keeps the magnitude
        i64::try_from(n)
            .map(LevelSpec::Integer)
            .unwrap_or(LevelSpec::Float(n as f64))
    }
}

impl From<f32> for LevelSpec {
    fn from(f: f32) -> Self {
        LevelSpec::Float(f as f64)
    }
}

impl From<f64> for LevelSpec {
    fn from(f: f64) -> Self {
        LevelSpec::Float(f)
    }
}

/// Parse a level from a name or a number
///
/// Names match case-insensitively; an unknown name fails with
/// [`LoggerError::InvalidLevel`] carrying `LogLevel::NULL`. Numbers must lie
/// in `0..=7`; an out-of-range number fails but the error still carries the
/// number as a level, available through [`LoggerError::rejected_level`].
///
/// ```
/// use leveled_logger::{parse_level, LogLevel};
///
/// assert_eq!(parse_level("warning").unwrap(), LogLevel::WARNING);
/// assert_eq!(parse_level(3).unwrap(), LogLevel::ERR);
/// assert_eq!(parse_level("loud").unwrap_err().rejected_level(), Some(LogLevel::NULL));
/// ```
pub fn parse_level(input: impl Into<LevelSpec>) -> Result<LogLevel> {
    input.into().parse()
}

/// Parse a level from an arbitrary JSON value
///
/// Strings and numbers follow [`parse_level`]; every other shape fails with
/// `LogLevel::NULL`.
pub fn parse_level_value(value: &serde_json::Value) -> Result<LogLevel> {
    match value {
        serde_json::Value::String(s) => parse_level(s.as_str()),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => parse_level(i),
            None => parse_level(n.as_f64().unwrap_or(f64::NAN)),
        },
        other => Err(LoggerError::invalid_level(other.to_string(), LogLevel::NULL)),
    }
}
