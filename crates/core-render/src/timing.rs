//! Repaint timing instrumentation.
//!
//! Captures the duration of the last completed repaint in nanoseconds plus a
//! running count of repaints. Readers are diagnostics only; the values are not
//! synchronized with any particular session.
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_REPAINT_NS: AtomicU64 = AtomicU64::new(0);
static REPAINTS: AtomicU64 = AtomicU64::new(0);

/// Record a repaint duration in nanoseconds.
pub fn record_last_repaint_ns(ns: u64) {
    LAST_REPAINT_NS.store(ns, Ordering::Relaxed);
    REPAINTS.fetch_add(1, Ordering::Relaxed);
}

/// Duration of the last recorded repaint in nanoseconds.
pub fn last_repaint_ns() -> u64 {
    LAST_REPAINT_NS.load(Ordering::Relaxed)
}

/// Total repaints recorded by this process.
pub fn repaint_count() -> u64 {
    REPAINTS.load(Ordering::Relaxed)
}
