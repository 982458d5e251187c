//! Policy-specific hand-off point between the dispatcher and the couriers.

use crate::coordination::{FifoShelf, ReadinessBoard};
use crate::model::{DeliveryPolicy, Order};
use std::time::Duration;

/// What a courier walks away with.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    /// The order actually handed over.
    pub order: Order,
    /// When the dispatcher marked the order ready (matched policy only).
    pub ready_at: Option<Duration>,
}

/// Where the dispatcher publishes ready orders and couriers collect them.
#[derive(Debug)]
pub enum DeliveryChannel {
    Matched(ReadinessBoard),
    Fifo(FifoShelf),
}

impl DeliveryChannel {
    pub fn for_policy(policy: DeliveryPolicy) -> Self {
        match policy {
            DeliveryPolicy::Matched => DeliveryChannel::Matched(ReadinessBoard::new()),
            DeliveryPolicy::Fifo => DeliveryChannel::Fifo(FifoShelf::new()),
        }
    }

    pub fn policy(&self) -> DeliveryPolicy {
        match self {
            DeliveryChannel::Matched(_) => DeliveryPolicy::Matched,
            DeliveryChannel::Fifo(_) => DeliveryPolicy::Fifo,
        }
    }

    /// Mark `order` deliverable as of `ready_at` and wake every courier.
    pub async fn publish(&self, order: &Order, ready_at: Duration) {
        match self {
            DeliveryChannel::Matched(board) => board.publish(order.id.clone(), ready_at).await,
            DeliveryChannel::Fifo(shelf) => shelf.publish(order.clone()).await,
        }
    }

    /// Block until a delivery opportunity exists for a courier assigned
    /// `assigned`, then take it.
    pub async fn collect(&self, assigned: &Order) -> Pickup {
        match self {
            DeliveryChannel::Matched(board) => {
                let ready_at = board.collect(&assigned.id).await;
                Pickup {
                    order: assigned.clone(),
                    ready_at: Some(ready_at),
                }
            }
            DeliveryChannel::Fifo(shelf) => Pickup {
                order: shelf.take_front().await,
                ready_at: None,
            },
        }
    }

    /// Published orders no courier has taken yet.
    pub async fn pending(&self) -> usize {
        match self {
            DeliveryChannel::Matched(board) => board.len().await,
            DeliveryChannel::Fifo(shelf) => shelf.len().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matched_pickup_is_the_assigned_order() {
        let channel = DeliveryChannel::for_policy(DeliveryPolicy::Matched);
        let soup = Order::new("A", "Soup", 5);
        let salad = Order::new("B", "Salad", 2);
        channel.publish(&soup, Duration::from_millis(1)).await;
        channel.publish(&salad, Duration::from_millis(2)).await;

        let pickup = channel.collect(&salad).await;

        assert_eq!(pickup.order, salad);
        assert_eq!(pickup.ready_at, Some(Duration::from_millis(2)));
        assert_eq!(channel.pending().await, 1);
    }

    #[tokio::test]
    async fn fifo_pickup_is_the_front_order() {
        let channel = DeliveryChannel::for_policy(DeliveryPolicy::Fifo);
        let soup = Order::new("A", "Soup", 5);
        let salad = Order::new("B", "Salad", 2);
        channel.publish(&soup, Duration::ZERO).await;
        channel.publish(&salad, Duration::ZERO).await;

        // Assigned the salad, but the soup is first on the shelf.
        let pickup = channel.collect(&salad).await;

        assert_eq!(pickup.order, soup);
        assert_eq!(pickup.ready_at, None);
        assert_eq!(channel.policy(), DeliveryPolicy::Fifo);
    }
}
