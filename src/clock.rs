//! # Simulation Time
//!
//! Every pause in the simulation (the feeder's tick, a courier's arrival
//! delay) and every timestamp (when an order became ready, when it was picked
//! up) goes through a [`Clock`].
//!
//! [`SystemClock`] reads and sleeps on the Tokio timer, so it follows whatever
//! time the surrounding runtime keeps:
//!
//! - **Running time**: real sleeps, used by the binary.
//! - **Paused time** (`#[tokio::test(start_paused = true)]`): a logical clock.
//!   Time stands still while any task can make progress and jumps to the
//!   earliest pending deadline once all of them are blocked. Couriers
//!   sleeping side by side wake at their own deadlines, whole runs finish
//!   instantly, and the same seed always yields the same wait times.
//!
//! Timestamps are expressed as a [`Duration`] since the clock's epoch.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;

/// Source of time and pauses for the simulation.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's epoch.
    fn now(&self) -> Duration;

    /// Suspend the calling task for `duration`.
    async fn sleep(&self, duration: Duration);

    /// Time elapsed since `since`, saturating at zero.
    fn elapsed_since(&self, since: Duration) -> Duration {
        self.now().saturating_sub(since)
    }
}

/// Clock backed by the Tokio timer of the current runtime.
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// The epoch is the moment of construction.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
