//! Sink metrics for observability
//!
//! Sinks never report I/O trouble to their callers, so these counters are the
//! only place swallowed failures and reopen cycles become visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by every sink.
///
/// # Example
///
/// ```
/// use rust_sink_logger::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Lines handed to the destination successfully
    lines_written: AtomicU64,

    /// Calls discarded by the severity threshold
    filtered: AtomicU64,

    /// Lines lost to a closed handle or a failed write/flush
    write_failures: AtomicU64,

    /// Close/open cycles attempted, including the initial open
    reopens: AtomicU64,

    /// Cycles whose open step failed
    reopen_failures: AtomicU64,
}

impl SinkMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            reopens: AtomicU64::new(0),
            reopen_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn reopens(&self) -> u64 {
        self.reopens.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn reopen_failures(&self) -> u64 {
        self.reopen_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_reopen(&self) -> u64 {
        self.reopens.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_reopen_failure(&self) -> u64 {
        self.reopen_failures.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinkMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            filtered: AtomicU64::new(self.filtered()),
            write_failures: AtomicU64::new(self.write_failures()),
            reopens: AtomicU64::new(self.reopens()),
            reopen_failures: AtomicU64::new(self.reopen_failures()),
        }
    }
}
