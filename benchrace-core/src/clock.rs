//! Monotonic Nanosecond Clock
//!
//! Wraps std::time::Instant behind a trait so the measurement loop can be
//! driven by scripted timestamps in tests.

use std::time::Instant;

/// Monotonic nanosecond time source.
///
/// Readings are nanoseconds since an arbitrary fixed origin; only the
/// difference between two readings is meaningful.
pub trait Clock {
    /// Current reading in nanoseconds.
    fn now_ns(&self) -> u128;
}

/// Wall-clock implementation backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock anchored at the current instant.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now_ns(&self) -> u128 {
        self.origin.elapsed().as_nanos()
    }
}
