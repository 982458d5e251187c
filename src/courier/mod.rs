//! # Couriers
//!
//! One [`Courier`] exists per dispatched order. It waits out a randomized
//! arrival delay, then blocks on the [`DeliveryChannel`] until the policy
//! lets it pick something up:
//!
//! - **matched**: until its own order id is on the readiness board. The food
//!   wait time (now minus the ready timestamp) is added to the
//!   [`WaitTimeAccumulator`].
//! - **fifo**: until the shelf is non-empty, taking the front order even if it
//!   is not the one the courier was dispatched for.
//!
//! Couriers are executed by a [`CourierPool`], either a bounded set of
//! workers or one task per order. The arrival delay counts from dispatch,
//! not from when a worker picks the courier up: time spent queued for a
//! worker is part of the trip.
//!
//! Dependencies reach the courier through [`CourierContext`], injected when
//! it runs rather than when it is created.

pub mod arrival;
pub mod pool;

pub use arrival::*;
pub use pool::*;

use crate::clock::Clock;
use crate::coordination::{DeliveryChannel, WaitTimeAccumulator};
use crate::model::{Delivery, Order};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Shared services a courier needs while it runs.
#[derive(Clone)]
pub struct CourierContext {
    pub channel: Arc<DeliveryChannel>,
    pub wait_times: Arc<WaitTimeAccumulator>,
    pub clock: Arc<dyn Clock>,
    pub time_unit: Duration,
}

/// A single delivery run for one dispatched order.
#[derive(Debug)]
pub struct Courier {
    index: usize,
    order: Order,
    rng: StdRng,
    dispatched_at: Duration,
}

impl Courier {
    /// `seed` feeds this courier's own generator; no RNG state is shared
    /// between couriers. `dispatched_at` is the clock reading at hand-off.
    pub fn new(index: usize, order: Order, seed: u64, dispatched_at: Duration) -> Self {
        Self {
            index,
            order,
            rng: StdRng::seed_from_u64(seed),
            dispatched_at,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The order this courier was dispatched for.
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub async fn run(mut self, ctx: CourierContext) -> Delivery {
        let policy = ctx.channel.policy();
        let label = format!("{}#{}", policy.courier_label(), self.index);

        let arrival = draw_arrival_units(&mut self.rng);
        let queued = ctx.clock.elapsed_since(self.dispatched_at);
        let remaining = (ctx.time_unit * arrival).saturating_sub(queued);
        if !remaining.is_zero() {
            ctx.clock.sleep(remaining).await;
        }
        debug!(order = %self.order.id, "{label} - arriving at time t={arrival} post dispatch");

        let pickup = ctx.channel.collect(&self.order).await;

        // The channel lock is released by now; the accumulator has its own.
        let food_wait = match pickup.ready_at {
            Some(ready_at) => {
                let wait = ctx.clock.elapsed_since(ready_at);
                ctx.wait_times.add_sample(wait).await;
                Some(wait)
            }
            None => None,
        };

        let delivery = Delivery {
            courier: label,
            assigned: self.order.id,
            delivered: pickup.order.id,
            food_wait,
        };
        info!("{delivery}");
        delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::model::{DeliveryPolicy, OrderId};

    const UNIT: Duration = Duration::from_millis(100);

    fn context(policy: DeliveryPolicy, clock: Arc<SystemClock>) -> CourierContext {
        CourierContext {
            channel: Arc::new(DeliveryChannel::for_policy(policy)),
            wait_times: Arc::new(WaitTimeAccumulator::new()),
            clock,
            time_unit: UNIT,
        }
    }

    fn arrival_of(seed: u64) -> Duration {
        UNIT * draw_arrival_units(&mut StdRng::seed_from_u64(seed))
    }

    #[tokio::test(start_paused = true)]
    async fn matched_courier_records_one_wait_sample() {
        let clock = Arc::new(SystemClock::new());
        let ctx = context(DeliveryPolicy::Matched, Arc::clone(&clock));
        let soup = Order::new("A", "Soup", 5);
        ctx.channel.publish(&soup, clock.now()).await;

        let delivery = Courier::new(0, soup, 1, clock.now()).run(ctx.clone()).await;

        assert_eq!(delivery.courier, "CourierMatched#0");
        assert_eq!(delivery.delivered, OrderId::from("A"));
        // Published at dispatch, so the food waits exactly the arrival delay.
        let wait = delivery.food_wait.expect("matched records a wait");
        assert_eq!(wait, arrival_of(1));
        assert_eq!(ctx.wait_times.samples().await, 1);
        assert_eq!(ctx.wait_times.total().await, wait);
        assert_eq!(ctx.channel.pending().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn time_queued_before_running_counts_toward_arrival() {
        let clock = Arc::new(SystemClock::new());
        let ctx = context(DeliveryPolicy::Matched, Arc::clone(&clock));
        let soup = Order::new("A", "Soup", 5);
        let dispatched_at = clock.now();
        ctx.channel.publish(&soup, dispatched_at).await;
        let courier = Courier::new(0, soup, 1, dispatched_at);

        // Sits unstarted for two units, as if every pool worker were busy.
        clock.sleep(UNIT * 2).await;
        let delivery = courier.run(ctx.clone()).await;

        assert_eq!(delivery.food_wait, Some(arrival_of(1)));
        assert_eq!(clock.now(), dispatched_at + arrival_of(1));
    }

    #[tokio::test(start_paused = true)]
    async fn courier_queued_past_its_arrival_picks_up_at_once() {
        let clock = Arc::new(SystemClock::new());
        let ctx = context(DeliveryPolicy::Matched, Arc::clone(&clock));
        let soup = Order::new("A", "Soup", 5);
        ctx.channel.publish(&soup, clock.now()).await;
        let courier = Courier::new(0, soup, 1, clock.now());

        clock.sleep(UNIT * (ARRIVAL_MAX_UNITS + 5)).await;
        let started = clock.now();
        courier.run(ctx.clone()).await;

        assert_eq!(clock.now(), started);
    }

    #[tokio::test(start_paused = true)]
    async fn fifo_courier_takes_front_order_and_records_nothing() {
        let clock = Arc::new(SystemClock::new());
        let ctx = context(DeliveryPolicy::Fifo, Arc::clone(&clock));
        let soup = Order::new("A", "Soup", 5);
        let salad = Order::new("B", "Salad", 2);
        ctx.channel.publish(&soup, clock.now()).await;
        ctx.channel.publish(&salad, clock.now()).await;

        let delivery = Courier::new(1, salad, 9, clock.now()).run(ctx.clone()).await;

        assert_eq!(delivery.courier, "CourierFIFO#1");
        assert_eq!(delivery.assigned, OrderId::from("B"));
        assert_eq!(delivery.delivered, OrderId::from("A"));
        assert_eq!(delivery.food_wait, None);
        assert_eq!(ctx.wait_times.samples().await, 0);
        assert_eq!(ctx.channel.pending().await, 1);
    }
}
