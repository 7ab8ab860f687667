//! Monotonic time source for hosts without their own tick stream.
//!
//! The recognizer itself never reads a clock; everything is driven by the
//! timestamps the host supplies. `MonotonicClock` is a convenience for
//! hosts that want to stamp events with real time (web-time keeps this
//! working under wasm, same as the rest of the stack).

use web_time::Instant;

use crate::types::TimestampMs;

#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Clock whose zero is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds elapsed since construction.
    pub fn now_ms(&self) -> TimestampMs {
        self.origin.elapsed().as_millis() as TimestampMs
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
