//! # Leveled Logger
//!
//! BSD-style severity levels on top of a plain line writer, with a runtime
//! threshold and optional fan-out of every message to channels.
//!
//! ## Features
//!
//! - **Syslog Levels**: `EMERG` through `DEBUG`, plus `NULL` to silence output
//! - **Channel Fan-out**: consumers registered with [`Logger::split`] receive
//!   messages with a bounded wait; slow consumers lose messages, never block
//! - **Thread Safe**: one logger can be shared across threads behind an `Arc`
//! - **Drop-in**: [`Logger::new`] behaves like an unleveled line logger
//!
//! ```
//! use leveled_logger::prelude::*;
//!
//! let sink = MemoryAppender::new();
//! let logger = Logger::with_level(LogLevel::ERR, true, sink.clone(), "", 0)?;
//!
//! logger.warning("disk low");
//! logger.err("disk full");
//! assert_eq!(sink.contents(), "ERR disk full\n");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{FileAppender, MemoryAppender};
    pub use crate::core::{
        flags, parse_level, parse_level_value, LevelSpec, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Message, Result, DEFAULT_TIMEOUT, LEVEL_NAMES,
    };
}

pub use crate::appenders::{FileAppender, MemoryAppender};
pub use crate::core::{
    flags, parse_level, parse_level_value, LevelSpec, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Message, OutputWriter, Result, DEFAULT_TIMEOUT,
    LEVEL_NAMES,
};
