use std::time::Duration;

/// Accumulates frame time and says when the next game tick is due.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    elapsed:  Duration,
}

impl Ticker {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Adds `dt` and returns true once the total strictly exceeds the
    /// interval, resetting the total. At most one tick per call.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed > self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
