//! Effect runners: self-contained simulations advanced on a fixed cadence.

pub mod rain;
pub mod snake;

use std::time::{Duration, Instant};

pub use rain::{RainCell, RainSurface};
pub use snake::{Cell, Heading, SnakeGame, SnakeKey, GRID_HEIGHT, GRID_WIDTH};

/// Fixed-rate schedule. Owned by its runner; dropping the runner cancels it.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of whole periods elapsed since the last poll, capped at `max`.
    ///
    /// Missed ticks beyond `max` are skipped rather than replayed.
    pub fn poll(&mut self, now: Instant, max: u32) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let mut fired = 0;
        while now >= self.next_due && fired < max {
            self.next_due += self.period;
            fired += 1;
        }
        if now >= self.next_due {
            self.next_due = now + self.period;
        }
        fired
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/fx/ticker.rs"]
mod tests;
