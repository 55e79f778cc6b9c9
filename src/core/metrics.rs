//! Logger metrics for observability
//!
//! Counters describing what dispatch did with each message: how many
//! consumer deliveries succeeded or timed out, how many messages were
//! suppressed by the threshold, and how many reached the writer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// All counters only ever increase.
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_missed();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.missed_messages(), 1);
/// assert_eq!(metrics.delivered_messages(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Consumer deliveries abandoned after the timeout
    missed_messages: AtomicU64,

    /// Consumer deliveries accepted before the timeout
    delivered_messages: AtomicU64,

    /// Messages stopped by the level threshold
    suppressed_messages: AtomicU64,

    /// Messages handed to the writer
    written_messages: AtomicU64,

    /// Messages dropped because their level has no name
    rejected_messages: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            missed_messages: AtomicU64::new(0),
            delivered_messages: AtomicU64::new(0),
            suppressed_messages: AtomicU64::new(0),
            written_messages: AtomicU64::new(0),
            rejected_messages: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn missed_messages(&self) -> u64 {
        self.missed_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered_messages(&self) -> u64 {
        self.delivered_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_messages(&self) -> u64 {
        self.suppressed_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written_messages(&self) -> u64 {
        self.written_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_messages(&self) -> u64 {
        self.rejected_messages.load(Ordering::Relaxed)
    }

    /// Record a timed-out delivery, returning the previous count
    #[inline]
    pub fn record_missed(&self) -> u64 {
        self.missed_messages.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered_messages.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed_messages.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written_messages.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.rejected_messages.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of consumer deliveries that timed out, as a percentage
    ///
    /// Returns 0.0 if no delivery has been attempted.
    pub fn miss_rate(&self) -> f64 {
        let missed = self.missed_messages() as f64;
        let total = self.delivered_messages() as f64 + missed;
        if total == 0.0 {
            0.0
        } else {
            (missed / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            missed_messages: AtomicU64::new(self.missed_messages()),
            delivered_messages: AtomicU64::new(self.delivered_messages()),
            suppressed_messages: AtomicU64::new(self.suppressed_messages()),
            written_messages: AtomicU64::new(self.written_messages()),
            rejected_messages: AtomicU64::new(self.rejected_messages()),
        }
    }
}
