//! FIFO buffer between the feeder and the dispatcher.

use crate::model::Order;
use std::collections::VecDeque;
use tokio::sync::{Mutex, Notify};

/// Orders released by the feeder and not yet taken by the dispatcher.
///
/// Unbounded: the feeder's pacing, not this queue, limits how fast orders
/// enter the system.
#[derive(Debug, Default)]
pub struct PickupQueue {
    orders: Mutex<VecDeque<Order>>,
    released: Notify,
}

impl PickupQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch in order and wake every waiting consumer.
    pub async fn push_batch(&self, batch: impl IntoIterator<Item = Order>) {
        {
            let mut orders = self.orders.lock().await;
            orders.extend(batch);
        }
        self.released.notify_waiters();
    }

    /// Block until an order is available, then remove the front one.
    pub async fn pop_next(&self) -> Order {
        loop {
            // Register before checking so a push between the check and the
            // wait still wakes us.
            let released = self.released.notified();
            tokio::pin!(released);
            released.as_mut().enable();

            if let Some(order) = self.orders.lock().await.pop_front() {
                return order;
            }
            released.await;
        }
    }

    /// Remove the front order without blocking.
    pub async fn try_pop(&self) -> Option<Order> {
        self.orders.lock().await.pop_front()
    }

    /// Current number of queued orders.
    pub async fn len(&self) -> usize {
        self.orders.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.lock().await.is_empty()
    }
}
