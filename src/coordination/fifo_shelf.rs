//! Fifo-policy delivery buffer.

use crate::model::Order;
use std::collections::VecDeque;
use tokio::sync::{Mutex, Notify};

/// Ready orders in the order the dispatcher published them.
///
/// A courier takes whatever is at the front, which is not necessarily the
/// order it was dispatched for.
#[derive(Debug, Default)]
pub struct FifoShelf {
    ready: Mutex<VecDeque<Order>>,
    stocked: Notify,
}

impl FifoShelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ready order and wake all waiters.
    pub async fn publish(&self, order: Order) {
        self.ready.lock().await.push_back(order);
        self.stocked.notify_waiters();
    }

    /// Block until the shelf is non-empty, then take the front order.
    pub async fn take_front(&self) -> Order {
        loop {
            let stocked = self.stocked.notified();
            tokio::pin!(stocked);
            stocked.as_mut().enable();

            if let Some(order) = self.ready.lock().await.pop_front() {
                return order;
            }
            stocked.await;
        }
    }

    pub async fn len(&self) -> usize {
        self.ready.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ready.lock().await.is_empty()
    }
}
