//! Wall-clock sources used by the time accumulator.
//!
//! # Responsibility
//! - Provide millisecond timestamps for tick sampling.
//! - Allow deterministic time in tests via `ManualClock`.
//!
//! # Invariants
//! - Timestamps are Unix epoch milliseconds.
//! - A clock may step backwards; callers must not assume monotonicity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" for tick sampling.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current time in epoch milliseconds.
    fn now_ms(&self) -> u64;
}

/// `SystemTime`-backed clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Manually driven clock.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// pass another into a service.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock frozen at `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Moves time forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Sets an absolute time, possibly earlier than the current one.
    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let shared = clock.clone();

        clock.advance(250);
        assert_eq!(shared.now_ms(), 1_250);

        shared.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now_ms() > 0);
    }
}
