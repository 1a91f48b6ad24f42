//! Millisecond clock abstraction used by the rate gate and the gauge sweep.
//!
//! The clock is a free-running `u32` counter that wraps after ~49.7 days.
//! Consumers must compare readings with `wrapping_sub`, never against a
//! precomputed absolute deadline.
use core::cell::Cell;

/// Monotonic millisecond counter, wrapping on overflow.
pub trait MonotonicClock {
    /// Current reading in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    #[inline]
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock moved by hand. Drives host replays and tests deterministically.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    /// Clock starting at `start_ms`.
    pub const fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Jump to an absolute reading.
    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    /// Move forward by `millis`, wrapping like the hardware counter does.
    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }
}

impl MonotonicClock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Clock backed by the embassy time driver, truncated to a wrapping `u32`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
