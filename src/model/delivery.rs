use crate::model::OrderId;
use std::fmt::Display;
use std::time::Duration;

/// What a courier reports once it hands an order to the customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// Courier identity, e.g. `CourierMatched#4`.
    pub courier: String,
    /// The order the courier was dispatched for.
    pub assigned: OrderId,
    /// The order the courier actually picked up. Differs from `assigned`
    /// only under the fifo policy.
    pub delivered: OrderId,
    /// Time the food sat on the shelf. Only recorded under the matched policy.
    pub food_wait: Option<Duration>,
}

impl Delivery {
    /// Food wait time in milliseconds, if one was recorded.
    pub fn food_wait_ms(&self) -> Option<f64> {
        self.food_wait.map(|wait| wait.as_secs_f64() * 1000.0)
    }
}

impl Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - delivering order={}", self.courier, self.delivered)?;
        if let Some(ms) = self.food_wait_ms() {
            write!(f, " foodWaitTime={ms}")?;
        }
        Ok(())
    }
}
