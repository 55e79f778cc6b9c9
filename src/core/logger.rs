//! Main logger implementation

use super::{
    config::{LoggerConfig, DEFAULT_TIMEOUT},
    error::{LoggerError, Result},
    log_level::LogLevel,
    message::Message,
    metrics::LoggerMetrics,
    writer::OutputWriter,
};
use crossbeam_channel::{SendTimeoutError, Sender};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Consumer channels, replaced wholesale on registration so dispatch can
/// hold a snapshot without blocking `split`
type ConsumerList = Arc<Vec<Sender<Message>>>;

/// A leveled logger with optional channel fan-out
///
/// Messages at or above the threshold (numerically `<=`) are written to the
/// output writer and to consumers registered with `split(.., false)`.
/// Consumers registered with `split(.., true)` see every message.
///
/// All configuration is internally synchronized, so a logger can be shared
/// across threads behind an `Arc`.
pub struct Logger {
    level: RwLock<LogLevel>,
    include_level: AtomicBool,
    timeout: RwLock<Duration>,
    /// Channels that receive every message regardless of level
    all_consumers: RwLock<ConsumerList>,
    /// Channels that only receive messages passing the threshold
    level_consumers: RwLock<ConsumerList>,
    writer: Mutex<OutputWriter>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger at `DEBUG` without level prefixes
    ///
    /// Behaves like a plain line logger until the threshold is raised.
    #[must_use]
    pub fn new(writer: impl Write + Send + 'static, prefix: impl Into<String>, flags: u32) -> Self {
        Self::from_parts(
            LogLevel::DEBUG,
            false,
            DEFAULT_TIMEOUT,
            OutputWriter::new(writer, prefix, flags),
        )
    }

    /// Create a logger with the given threshold
    ///
    /// Fails with [`LoggerError::InvalidLevel`] unless `level` lies in
    /// `NULL..=DEBUG`.
    pub fn with_level(
        level: LogLevel,
        include_level: bool,
        writer: impl Write + Send + 'static,
        prefix: impl Into<String>,
        flags: u32,
    ) -> Result<Self> {
        check_threshold(level)?;
        Ok(Self::from_parts(
            level,
            include_level,
            DEFAULT_TIMEOUT,
            OutputWriter::new(writer, prefix, flags),
        ))
    }

    fn from_parts(
        level: LogLevel,
        include_level: bool,
        timeout: Duration,
        writer: OutputWriter,
    ) -> Self {
        Self {
            level: RwLock::new(level),
            include_level: AtomicBool::new(include_level),
            timeout: RwLock::new(timeout),
            all_consumers: RwLock::new(Arc::default()),
            level_consumers: RwLock::new(Arc::default()),
            writer: Mutex::new(writer),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::NOTICE)
    ///     .include_level(true)
    ///     .writer(MemoryAppender::new())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.level(), LogLevel::NOTICE);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Change the threshold; the new value applies to the next dispatch
    pub fn set_level(&self, level: LogLevel) -> Result<()> {
        check_threshold(level)?;
        *self.level.write() = level;
        Ok(())
    }

    pub fn include_level(&self) -> bool {
        self.include_level.load(Ordering::Relaxed)
    }

    pub fn set_include_level(&self, include: bool) {
        self.include_level.store(include, Ordering::Relaxed);
    }

    /// How long a dispatch waits on each consumer before dropping the message
    pub fn timeout(&self) -> Duration {
        *self.timeout.read()
    }

    pub fn set_timeout(&self, timeout: Duration) {
        *self.timeout.write() = timeout;
    }

    pub fn prefix(&self) -> String {
        self.writer.lock().prefix().to_string()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.writer.lock().set_prefix(prefix);
    }

    pub fn flags(&self) -> u32 {
        self.writer.lock().flags()
    }

    pub fn set_flags(&self, flags: u32) {
        self.writer.lock().set_flags(flags);
    }

    /// Redirect output to a new sink, keeping prefix and flags
    ///
    /// The previous sink is flushed; a flush failure is returned after the
    /// new sink is already in place.
    pub fn set_writer(&self, writer: impl Write + Send + 'static) -> Result<()> {
        self.writer.lock().set_sink(Box::new(writer))
    }

    /// Register a channel that receives log messages
    ///
    /// With `send_all` the channel sees every message regardless of the
    /// threshold; otherwise only messages that are also written. Channels
    /// are never removed. A send that cannot complete within
    /// [`timeout`](Self::timeout) is dropped and counted in
    /// [`missed_messages`](Self::missed_messages).
    pub fn split(&self, consumer: Sender<Message>, send_all: bool) {
        let list = if send_all {
            &self.all_consumers
        } else {
            &self.level_consumers
        };
        let mut guard = list.write();
        Arc::make_mut(&mut *guard).push(consumer);
    }

    pub fn all_consumer_count(&self) -> usize {
        self.all_consumers.read().len()
    }

    pub fn filtered_consumer_count(&self) -> usize {
        self.level_consumers.read().len()
    }

    /// Number of consumer deliveries abandoned after the timeout
    pub fn missed_messages(&self) -> u64 {
        self.metrics.missed_messages()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()
    }

    /// Log at an explicit level
    ///
    /// `level` must be one of the eight named levels; anything else (NULL
    /// included) is dropped and counted as rejected.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !level.is_named() {
            self.metrics.record_rejected();
            return;
        }
        self.dispatch(level, message.to_string(), Location::caller());
    }

    /// Route one message to consumers and the writer
    ///
    /// Order: every "all" consumer, then the threshold check, then every
    /// filtered consumer, then the writer.
    fn dispatch(&self, level: LogLevel, text: String, location: &Location<'_>) {
        let message = Message::new(level, text);
        let timeout = self.timeout();

        let all_consumers = Arc::clone(&self.all_consumers.read());
        for consumer in all_consumers.iter() {
            self.deliver(consumer, &message, timeout);
        }

        if !level.is_enabled_at(self.level()) {
            self.metrics.record_suppressed();
            return;
        }

        let level_consumers = Arc::clone(&self.level_consumers.read());
        for consumer in level_consumers.iter() {
            self.deliver(consumer, &message, timeout);
        }

        if self.include_level() {
            self.write_line(location, &format!("{} {}", level, message.message));
        } else {
            self.write_line(location, &message.message);
        }
    }

    fn deliver(&self, consumer: &Sender<Message>, message: &Message, timeout: Duration) {
        match consumer.send_timeout(message.clone(), timeout) {
            Ok(()) => {
                self.metrics.record_delivered();
            }
            Err(SendTimeoutError::Timeout(_)) | Err(SendTimeoutError::Disconnected(_)) => {
                self.metrics.record_missed();
            }
        }
    }

    /// Hand a line to the writer; write errors belong to the writer
    fn write_line(&self, location: &Location<'_>, text: &str) {
        let _ = self.writer.lock().output(location, text);
        self.metrics.record_written();
    }

    /// Write straight to the output, bypassing levels and consumers
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.write_line(Location::caller(), &message.to_string());
    }

    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) {
        self.write_line(Location::caller(), &format!("{}\n", message));
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.write_line(Location::caller(), &fmt::format(args));
    }

    /// Log at `EMERG`, flush the writer and exit the process with status 1
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.dispatch(LogLevel::EMERG, message.to_string(), Location::caller());
        self.exit()
    }

    #[track_caller]
    pub fn fatalln(&self, message: impl fmt::Display) -> ! {
        self.dispatch(LogLevel::EMERG, format!("{}\n", message), Location::caller());
        self.exit()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.dispatch(LogLevel::EMERG, fmt::format(args), Location::caller());
        self.exit()
    }

    fn exit(&self) -> ! {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(1)
    }

    /// Log at `EMERG`, then panic with the message text as payload
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let text = message.to_string();
        self.dispatch(LogLevel::EMERG, text.clone(), Location::caller());
        std::panic::panic_any(text)
    }

    #[track_caller]
    pub fn panicln(&self, message: impl fmt::Display) -> ! {
        let text = format!("{}\n", message);
        self.dispatch(LogLevel::EMERG, text.clone(), Location::caller());
        std::panic::panic_any(text)
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let text = fmt::format(args);
        self.dispatch(LogLevel::EMERG, text.clone(), Location::caller());
        std::panic::panic_any(text)
    }
}

fn check_threshold(level: LogLevel) -> Result<()> {
    if level.is_valid_threshold() {
        Ok(())
    } else {
        Err(LoggerError::invalid_level(level.value().to_string(), level))
    }
}

macro_rules! severity_methods {
    ($($level:ident => $plain:ident, $line:ident, $formatted:ident;)+) => {
        impl Logger {
            $(
                #[doc = concat!("Log at `", stringify!($level), "`.")]
                #[track_caller]
                #[inline]
                pub fn $plain(&self, message: impl fmt::Display) {
                    self.dispatch(LogLevel::$level, message.to_string(), Location::caller());
                }

                #[doc = concat!("Log at `", stringify!($level), "` with a trailing newline.")]
                #[track_caller]
                #[inline]
                pub fn $line(&self, message: impl fmt::Display) {
                    self.dispatch(LogLevel::$level, format!("{}\n", message), Location::caller());
                }

                #[doc = concat!("Log preformatted arguments at `", stringify!($level), "`.")]
                #[track_caller]
                #[inline]
                pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                    self.dispatch(LogLevel::$level, fmt::format(args), Location::caller());
                }
            )+
        }
    };
}

severity_methods! {
    EMERG => emerg, emergln, emergf;
    ALERT => alert, alertln, alertf;
    CRIT => crit, critln, critf;
    ERR => err, errln, errf;
    WARNING => warning, warningln, warningf;
    NOTICE => notice, noticeln, noticef;
    INFO => info, infoln, infof;
    DEBUG => debug, debugln, debugf;
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("include_level", &self.include_level())
            .field("timeout", &self.timeout())
            .field("all_consumers", &self.all_consumer_count())
            .field("level_consumers", &self.filtered_consumer_count())
            .field("missed_messages", &self.missed_messages())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.writer.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let missed = self.metrics.missed_messages();
        if missed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} missed channel messages (miss rate: {:.2}%)",
                missed,
                self.metrics.miss_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
/// use std::time::Duration;
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let logger = Logger::builder()
///     .level(LogLevel::ERR)
///     .timeout(Duration::from_millis(50))
///     .writer(MemoryAppender::new())
///     .split(tx, true)
///     .build()
///     .unwrap();
///
/// logger.debug("seen by the channel only");
/// assert_eq!(rx.len(), 1);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    include_level: bool,
    timeout: Duration,
    prefix: String,
    flags: u32,
    writer: Option<Box<dyn Write + Send>>,
    consumers: Vec<(Sender<Message>, bool)>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults: `DEBUG`, no level prefix, one second timeout, no header
    /// flags, writing to stderr.
    pub fn new() -> Self {
        Self {
            level: LogLevel::DEBUG,
            include_level: false,
            timeout: DEFAULT_TIMEOUT,
            prefix: String::new(),
            flags: 0,
            writer: None,
            consumers: Vec::new(),
        }
    }

    /// Start from a parsed configuration
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new()
            .level(config.threshold()?)
            .include_level(config.include_level)
            .timeout(config.timeout())
            .prefix(config.prefix.clone())
            .flags(config.flags))
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_level(mut self, include: bool) -> Self {
        self.include_level = include;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Register a consumer, see [`Logger::split`]
    #[must_use = "builder methods return a new value"]
    pub fn split(mut self, consumer: Sender<Message>, send_all: bool) -> Self {
        self.consumers.push((consumer, send_all));
        self
    }

    /// Build the Logger, validating the threshold
    pub fn build(self) -> Result<Logger> {
        check_threshold(self.level)?;

        let sink = self
            .writer
            .unwrap_or_else(|| Box::new(std::io::stderr()));
        let logger = Logger::from_parts(
            self.level,
            self.include_level,
            self.timeout,
            OutputWriter::from_boxed(sink, self.prefix, self.flags),
        );
        for (consumer, send_all) in self.consumers {
            logger.split(consumer, send_all);
        }
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
