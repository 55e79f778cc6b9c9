//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes a logger followed by `format!`-style arguments and
//! forwards to the matching `*f` method, so the reported source location is
//! the macro invocation.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warning};
//!
//! let sink = MemoryAppender::new();
//! let logger = Logger::new(sink.clone(), "", 0);
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! warning!(logger, "Port {} already bound", port);
//!
//! assert_eq!(sink.lines(), vec!["Server started", "Port 8080 already bound"]);
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(MemoryAppender::new(), "", 0);
/// use leveled_logger::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::ERR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

/// Log an `EMERG` message.
#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emergf(::std::format_args!($($arg)+))
    };
}

/// Log an `ALERT` message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $logger.alertf(::std::format_args!($($arg)+))
    };
}

/// Log a `CRIT` message.
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $logger.critf(::std::format_args!($($arg)+))
    };
}

/// Log an `ERR` message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(MemoryAppender::new(), "", 0);
/// use leveled_logger::err;
/// err!(logger, "Failed to connect to {}", "db01");
/// ```
#[macro_export]
macro_rules! err {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errf(::std::format_args!($($arg)+))
    };
}

/// Log a `WARNING` message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

/// Log a `NOTICE` message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $logger.noticef(::std::format_args!($($arg)+))
    };
}

/// Log an `INFO` message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log a `DEBUG` message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Log at `EMERG` and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new(MemoryAppender::new(), "", 0);
/// use leveled_logger::fatal;
/// fatal!(logger, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
