//! Paced release of the input orders into the pickup queue.

use crate::clock::Clock;
use crate::coordination::PickupQueue;
use crate::model::Order;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Releases at most `batch_size` orders per time unit, in input order.
pub struct OrderFeeder {
    orders: VecDeque<Order>,
    batch_size: usize,
    queue: Arc<PickupQueue>,
    clock: Arc<dyn Clock>,
    time_unit: Duration,
}

impl OrderFeeder {
    pub fn new(
        orders: impl IntoIterator<Item = Order>,
        batch_size: usize,
        queue: Arc<PickupQueue>,
        clock: Arc<dyn Clock>,
        time_unit: Duration,
    ) -> Self {
        Self {
            orders: orders.into_iter().collect(),
            batch_size,
            queue,
            clock,
            time_unit,
        }
    }

    /// Feed every order, pausing one time unit after each batch. Returns the
    /// number of orders released.
    pub async fn run(mut self) -> usize {
        info!(pending = self.orders.len(), batch_size = self.batch_size, "Order feeder started");
        let mut released = 0;
        while !self.orders.is_empty() {
            let take = self.batch_size.min(self.orders.len());
            let batch: Vec<Order> = self.orders.drain(..take).collect();
            debug!(batch = batch.len(), remaining = self.orders.len(), "Releasing orders");
            released += batch.len();
            self.queue.push_batch(batch).await;
            self.clock.sleep(self.time_unit).await;
        }
        info!(released, "Order feeder exiting");
        released
    }
}
