//! Local id generation for records the remote API does not persist.
//!
//! A created record gets the wall-clock time in milliseconds at which the create
//! started. Reads never go backwards: if the clock steps back, the previous value is
//! reused. Two creates within the same millisecond share an id; nothing guards against
//! that.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of millisecond stamps.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Non-decreasing millisecond id source. Clones share the same high-water mark.
#[derive(Clone)]
pub struct TimestampIds {
    clock: Clock,
    last: Arc<AtomicI64>,
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampIds {
    /// Ids from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(|| chrono::Utc::now().timestamp_millis()))
    }

    /// Ids from a custom clock (tests use fixed or scripted clocks).
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            last: Arc::new(AtomicI64::new(i64::MIN)),
        }
    }

    /// The next id: the current stamp, or the previous one if the clock went back.
    pub fn next_id(&self) -> i64 {
        let now = (self.clock)();
        let previous = self.last.fetch_max(now, Ordering::SeqCst);
        previous.max(now)
    }
}
