//! # Dispatcher
//!
//! Drains the [`PickupQueue`] one order at a time, hands each order to a new
//! [`Courier`] and publishes the order into the [`DeliveryChannel`]. Once the
//! expected number of orders has been processed it stops taking work and
//! waits for every courier to finish.
//!
//! Publication always follows the hand-off to the courier pool. A courier
//! blocked on the channel is therefore always waiting for something that
//! has been, or is about to be, published.
//!
//! [`DeliveryChannel`]: crate::coordination::DeliveryChannel

use crate::config::PoolMode;
use crate::coordination::PickupQueue;
use crate::courier::{courier_seed, Courier, CourierContext, CourierPool};
use crate::error::DispatchError;
use crate::model::{Delivery, DeliveryPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of a dispatcher run.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchSummary {
    pub processed: usize,
    pub deliveries: Vec<Delivery>,
}

pub struct Dispatcher {
    total_anticipated_orders: usize,
    queue: Arc<PickupQueue>,
    pool: PoolMode,
    ctx: CourierContext,
    run_seed: u64,
}

impl Dispatcher {
    pub fn new(
        total_anticipated_orders: usize,
        queue: Arc<PickupQueue>,
        pool: PoolMode,
        ctx: CourierContext,
        run_seed: u64,
    ) -> Self {
        Self {
            total_anticipated_orders,
            queue,
            pool,
            ctx,
            run_seed,
        }
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.ctx.channel.policy()
    }

    pub async fn run(self) -> Result<DispatchSummary, DispatchError> {
        let taker = self.policy().taker_label();
        info!(expected = self.total_anticipated_orders, "Order taker {taker}");

        let mut couriers = CourierPool::start(self.pool, self.ctx.clone());
        let mut processed = 0;
        loop {
            if processed == self.total_anticipated_orders {
                info!("{taker} - Completed Tasks - ProcessedOrders={processed}");
                break;
            }

            let order = self.queue.pop_next().await;
            debug!(order = %order.id, name = %order.name, "Dispatching order");

            let courier = Courier::new(
                processed,
                order.clone(),
                courier_seed(self.run_seed, processed),
                self.ctx.clock.now(),
            );
            couriers.dispatch(courier).await?;

            // Only after the courier exists may the order be published.
            self.ctx.channel.publish(&order, self.ctx.clock.now()).await;
            processed += 1;
        }

        let deliveries = couriers.join().await?;
        debug!(delivered = deliveries.len(), "All couriers finished");
        Ok(DispatchSummary {
            processed,
            deliveries,
        })
    }
}
