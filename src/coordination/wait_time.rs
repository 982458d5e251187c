//! Running total of food wait times.

use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Totals {
    total: Duration,
    samples: usize,
}

/// Total food wait time across delivered orders.
///
/// Only grows. Couriers add one sample each under the matched policy; the
/// total is read once after every courier has finished.
#[derive(Debug, Default)]
pub struct WaitTimeAccumulator {
    totals: Mutex<Totals>,
}

impl WaitTimeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_sample(&self, wait: Duration) {
        let mut totals = self.totals.lock().await;
        totals.total += wait;
        totals.samples += 1;
    }

    /// Sum of every recorded sample.
    pub async fn total(&self) -> Duration {
        self.totals.lock().await.total
    }

    /// Number of samples recorded so far.
    pub async fn samples(&self) -> usize {
        self.totals.lock().await.samples
    }
}
