//! Timing Primitives
//!
//! `Timer` measures a single span on the monotonic clock. `LapTimer`
//! accumulates many spans ("laps") so that only the timed section of each
//! iteration contributes to the total, while everything between laps runs
//! with the clock stopped.

use std::time::{Duration, Instant};

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for measuring a single span
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Stop the timer and return the elapsed time
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

// ─── LapTimer ────────────────────────────────────────────────────────────────

/// Accumulates the elapsed time of individually timed sections.
///
/// The clock only runs inside [`LapTimer::time`]; code outside it (input
/// preparation, verification) is never counted.
#[derive(Debug, Clone, Default)]
pub struct LapTimer {
    laps: u64,
    total: Duration,
}

impl LapTimer {
    /// Create an empty lap timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with the clock running and record it as one lap.
    #[inline]
    pub fn time<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let timer = Timer::start();
        let result = f();
        self.record(timer.stop());
        result
    }

    /// Record a lap measured elsewhere
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.laps += 1;
        self.total += elapsed;
    }

    /// Number of laps recorded
    pub fn laps(&self) -> u64 {
        self.laps
    }

    /// Sum of all laps
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Mean lap time (zero when no laps were recorded)
    pub fn mean(&self) -> Duration {
        if self.laps == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total.as_secs_f64() / self.laps as f64)
    }

    /// Mean lap time in milliseconds
    pub fn mean_millis(&self) -> f64 {
        if self.laps == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1_000.0 / self.laps as f64
    }
}
