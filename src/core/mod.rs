//! Core logger types

pub mod config;
pub mod error;
pub mod header;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod writer;

pub use config::{LoggerConfig, DEFAULT_TIMEOUT};
pub use error::{LoggerError, Result};
pub use header::flags;
pub use log_level::{parse_level, parse_level_value, LevelSpec, LogLevel, LEVEL_NAMES};
pub use logger::{Logger, LoggerBuilder};
pub use message::Message;
pub use metrics::LoggerMetrics;
pub use writer::OutputWriter;
