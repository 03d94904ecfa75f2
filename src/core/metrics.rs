//! Logger metrics for observability
//!
//! Counters describing what a logger has done with the calls it received.
//! They are diagnostic only and never influence the filtering decision.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-logger call counters
///
/// # Example
///
/// ```
/// use rust_sink_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_delivered();
/// metrics.record_filtered();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.delivered_count(), 1);
/// assert_eq!(metrics.filtered_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Records handed to the sink successfully. For a fan-out logger this
    /// counts records accepted by the fan-out sink, even when every child
    /// then filtered them; each child counts its own deliveries.
    delivered: AtomicU64,

    /// Calls rejected by the condition or a threshold
    filtered: AtomicU64,

    /// Calls that passed the filter but failed to format or deliver
    failed: AtomicU64,

    /// Fatal records that triggered the fatal handler
    fatal_events: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            fatal_events: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fatal_count(&self) -> u64 {
        self.fatal_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fatal(&self) -> u64 {
        self.fatal_events.fetch_add(1, Ordering::Relaxed)
    }

    /// Total calls seen, whatever their outcome
    pub fn total_calls(&self) -> u64 {
        self.delivered_count() + self.filtered_count() + self.failed_count()
    }

    /// Share of calls rejected by the filter, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no calls have been made.
    pub fn filter_rate(&self) -> f64 {
        let total = self.total_calls();
        if total == 0 {
            return 0.0;
        }
        (self.filtered_count() as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.fatal_events.store(0, Ordering::Relaxed);
    }
}
