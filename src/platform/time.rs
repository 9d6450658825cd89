//! Fixed-step pacing against a monotonic clock

use std::time::{Duration, Instant};

use crate::consts::{MAX_DELTA_TIME, TICK_INTERVAL};

/// Gates ticks to a fixed cadence and measures the delta between them.
///
/// The delta is the real time since the previous tick (so it is at least the
/// interval when ticks are on time) clamped to `max_delta` seconds.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    max_delta: f32,
    last_tick: Instant,
}

impl FixedStep {
    pub fn new(start: Instant) -> Self {
        Self::with_interval(start, TICK_INTERVAL, MAX_DELTA_TIME)
    }

    pub fn with_interval(start: Instant, interval: Duration, max_delta: f32) -> Self {
        Self {
            interval,
            max_delta,
            last_tick: start,
        }
    }

    /// Earliest instant the next tick may run
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    /// Consume a tick at `now` and return its clamped delta in seconds
    pub fn advance(&mut self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        elapsed.min(self.max_delta)
    }

    /// Sleep until the next deadline, then consume the tick
    pub fn wait(&mut self) -> f32 {
        let now = Instant::now();
        let deadline = self.next_deadline();
        if now < deadline {
            std::thread::sleep(deadline - now);
        }
        self.advance(Instant::now())
    }
}
