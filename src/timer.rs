//! Wall-clock timing for the driver.

use std::time::{Duration, Instant};

/// A started measurement.
///
/// `start` hands the state to the caller and `stop` consumes it, so
/// measurements can nest or overlap without any shared timer state.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Begins a measurement on the monotonic clock.
    pub fn start() -> Self {
        Stopwatch {
            started: Instant::now(),
        }
    }

    /// Ends the measurement and returns the elapsed wall-clock time.
    pub fn stop(self) -> Duration {
        self.started.elapsed()
    }
}
