//! Millisecond time base for the rendering library

use core::sync::atomic::{AtomicU32, Ordering};

/// Period in ms the timer is expected to call [`Ticker::advance_time`] with
pub const TICK_PERIOD_MS: u32 = 5;

/// Time base advanced from a periodic timer
///
/// Only a counter update, no I/O, so it is safe to call from a timer interrupt while
/// a bus transfer is in flight. Meant to live in a `static`:
///
/// ```ignore
/// static TICKER: Ticker = Ticker::new();
///
/// // in the timer callback
/// TICKER.advance_time(TICK_PERIOD_MS);
/// ```
#[derive(Debug, Default)]
pub struct Ticker {
    ms: AtomicU32,
}

impl Ticker {
    /// A time base starting at 0 ms
    pub const fn new() -> Self {
        Ticker {
            ms: AtomicU32::new(0),
        }
    }

    /// Advance the time base by `delta_ms`
    ///
    /// Wraps around after `u32::MAX` ms.
    pub fn advance_time(&self, delta_ms: u32) {
        // load + store instead of fetch_add: the timer is the only writer and
        // thumbv6m has no atomic read-modify-write
        let now = self.ms.load(Ordering::Relaxed);
        self.ms.store(now.wrapping_add(delta_ms), Ordering::Relaxed);
    }

    /// Milliseconds elapsed so far
    pub fn now(&self) -> u32 {
        self.ms.load(Ordering::Relaxed)
    }

    /// Milliseconds elapsed since `since`, accounting for wrap around
    pub fn elapsed(&self, since: u32) -> u32 {
        self.now().wrapping_sub(since)
    }
}
