//! Stopwatch for timing benchmark batches.
//!
//! Backed by the monotonic `Instant` clock, so readings never go backwards
//! and reading the clock cannot fail.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Measures time elapsed since construction or the last `reset()`.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Create a stopwatch that starts counting immediately.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart counting from now.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Fractional milliseconds since the last start/reset. Does not reset.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

/// Run `f` back to back `trials` times inside one timing window.
///
/// Returns the value of the final call and the batch time in milliseconds.
/// Every result goes through `black_box` so no trial can be elided.
pub fn time_batch<F>(stopwatch: &mut Stopwatch, trials: usize, mut f: F) -> (i32, f64)
where
    F: FnMut() -> i32,
{
    let mut last_result = 0;
    stopwatch.reset();
    for _ in 0..trials {
        last_result = black_box(f());
    }
    (last_result, stopwatch.elapsed_ms())
}
